use embedded_hal::digital::{InputPin, OutputPin};
use gpio_mem::StaticPool;
use hal::RecordingHal;

use crate::GpioManager;

fn blink<P: OutputPin>(pin: &mut P) {
    pin.set_high().unwrap();
    pin.set_low().unwrap();
}

#[test]
fn output_driver_routes_through_set_state() {
    let mut gpio = GpioManager::new(RecordingHal::<16>::new(), StaticPool::<2>::new());
    let mut led = gpio.create(1, 7).unwrap();
    gpio.set_direction(&mut led, true);

    blink(&mut gpio.output(&mut led));

    assert_eq!(
        gpio.hal().outputs().collect::<Vec<_>>(),
        [(1, 7, true), (1, 7, false)]
    );
}

#[test]
fn output_driver_on_input_pin_is_silent() {
    let mut gpio = GpioManager::new(RecordingHal::<16>::new(), StaticPool::<1>::new());
    let mut pin = gpio.create(1, 7).unwrap();

    blink(&mut gpio.output(&mut pin));

    assert!(gpio.hal().calls().is_empty());
}

#[test]
fn input_driver_reads_hal() {
    let mut gpio = GpioManager::new(RecordingHal::<16>::new(), StaticPool::<1>::new());
    gpio.hal_mut().set_input(2, 3, true);
    let button = gpio.create(2, 3).unwrap();

    let mut input = gpio.input(&button);
    assert!(input.is_high().unwrap());
    assert!(!input.is_low().unwrap());
}
