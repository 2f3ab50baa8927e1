//! End-to-end scenarios for gpio-handle

use gpio_handle::{GpioError, GpioManager, HeapAllocator, SharedPool, StaticPool};
use hal::{HalCall, RecordingHal};

#[test]
fn led_on_port_one_bit_seven() {
    let mut gpio = GpioManager::new(RecordingHal::<16>::new(), HeapAllocator::new());
    gpio.hal_mut().set_input(1, 7, true);

    let mut led = gpio.create(1, 7).expect("heap allocation");
    gpio.set_direction(&mut led, true);
    gpio.set_state(&mut led, false);
    gpio.set_state(&mut led, true);
    let level = gpio.get_state(&led);

    assert!(level);
    assert_eq!(
        gpio.hal().calls(),
        &[
            HalCall::SetDirection {
                port: 1,
                bit: 7,
                output: true,
            },
            HalCall::SetOutput {
                port: 1,
                bit: 7,
                state: false,
            },
            HalCall::SetOutput {
                port: 1,
                bit: 7,
                state: true,
            },
            HalCall::GetInput { port: 1, bit: 7 },
        ]
    );
}

#[test]
fn pool_of_two_exhausts_on_third_create() {
    let mut gpio = GpioManager::new(RecordingHal::<4>::new(), StaticPool::<2>::new());

    let first = gpio.create(0, 0);
    let second = gpio.create(0, 1);
    let third = gpio.create(0, 2);

    assert_eq!(first.map(|slot| slot.index()), Ok(0));
    assert_eq!(second.map(|slot| slot.index()), Ok(1));
    assert_eq!(third, Err(GpioError::PoolExhausted));
    assert!(gpio.hal().calls().is_empty());
}

#[test]
fn pool_of_ten_by_default() {
    let mut gpio = GpioManager::new(RecordingHal::<4>::new(), gpio_mem::DefaultPool::new());
    for bit in 0..10 {
        assert!(gpio.create(3, bit).is_ok());
    }
    assert_eq!(gpio.create(3, 10), Err(GpioError::PoolExhausted));
}

static PINS: SharedPool<2> = SharedPool::new();

#[test]
fn manager_over_shared_pool() {
    let mut gpio = GpioManager::new(RecordingHal::<8>::new(), &PINS);
    let mut led = gpio.create(1, 7).unwrap();
    let button = gpio.create(2, 3).unwrap();

    gpio.set_direction(&mut led, true);
    gpio.set_state(&mut led, true);

    assert!(gpio.direction(&led).is_output());
    assert!(!gpio.direction(&button).is_output());
    assert_eq!(gpio.create(0, 0), Err(GpioError::PoolExhausted));
    assert_eq!(gpio.hal().outputs().collect::<Vec<_>>(), [(1, 7, true)]);
}
