//! Button-to-LED application logic

use gpio_handle::{GpioManager, GpioResult, PinAllocator};
use hal::GpioHal;

pub const RED_LED_PORT: u8 = 1;
pub const RED_LED_BIT: u8 = 7;
pub const BUTTON_PORT: u8 = 2;
pub const BUTTON_BIT: u8 = 3;

/// Pin assignment for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    pub led: (u8, u8),
    pub button: (u8, u8),
}

impl Default for Wiring {
    fn default() -> Self {
        Self {
            led: (RED_LED_PORT, RED_LED_BIT),
            button: (BUTTON_PORT, BUTTON_BIT),
        }
    }
}

/// An LED that follows a button
pub struct ButtonLed<H, A: PinAllocator> {
    gpio: GpioManager<H, A>,
    led: A::Handle,
    button: A::Handle,
}

impl<H: GpioHal, A: PinAllocator> ButtonLed<H, A> {
    /// Create both pins, make the LED an output driven low and the button an input.
    ///
    /// Either `create` may fail on an exhausted allocator; the error is
    /// returned before any pin is configured.
    pub fn new(mut gpio: GpioManager<H, A>, wiring: Wiring) -> GpioResult<Self> {
        let mut led = gpio.create(wiring.led.0, wiring.led.1)?;
        let mut button = gpio.create(wiring.button.0, wiring.button.1)?;

        gpio.set_direction(&mut led, true);
        gpio.set_state(&mut led, false);
        gpio.set_direction(&mut button, false);

        log::info!("LED on {}, button on {}", gpio.pin(&led), gpio.pin(&button));
        Ok(Self { gpio, led, button })
    }

    /// One pass of the polling loop. Returns the button level.
    pub fn poll(&mut self) -> bool {
        let pressed = self.gpio.get_state(&self.button);
        self.gpio.set_state(&mut self.led, pressed);
        pressed
    }

    pub fn gpio(&self) -> &GpioManager<H, A> {
        &self.gpio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpio_handle::{GpioError, HeapAllocator, StaticPool};
    use hal::{HalCall, RecordingHal};

    #[test]
    fn setup_configures_led_then_button() {
        let gpio = GpioManager::new(RecordingHal::<16>::new(), HeapAllocator::new());
        let app = ButtonLed::new(gpio, Wiring::default()).unwrap();

        assert_eq!(
            app.gpio().hal().calls(),
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
                HalCall::SetDirection {
                    port: 2,
                    bit: 3,
                    output: false,
                },
            ]
        );
    }

    #[test]
    fn led_mirrors_button() {
        let mut hal = RecordingHal::<16>::new();
        hal.set_input(BUTTON_PORT, BUTTON_BIT, true);
        let gpio = GpioManager::new(hal, StaticPool::<2>::new());
        let mut app = ButtonLed::new(gpio, Wiring::default()).unwrap();

        assert!(app.poll());
        assert_eq!(
            app.gpio().hal().outputs().last(),
            Some((RED_LED_PORT, RED_LED_BIT, true))
        );
    }

    #[test]
    fn exhausted_pool_is_reported() {
        let gpio = GpioManager::new(RecordingHal::<16>::new(), StaticPool::<1>::new());
        let result = ButtonLed::new(gpio, Wiring::default());
        assert!(matches!(result, Err(GpioError::PoolExhausted)));
    }
}
