//! `embedded-hal` digital pin adapters.
//!
//! Drivers borrow the manager together with one handle, so generic
//! `embedded-hal` code can drive managed pins. They go through
//! [`GpioManager::set_state`] and [`GpioManager::get_state`], so a write to a
//! pin still configured as input is ignored here as well.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use gpio_mem::PinAllocator;
use hal::GpioHal;

use crate::GpioManager;

/// Output side of a managed pin
pub struct OutputDriver<'a, H, A: PinAllocator> {
    manager: &'a mut GpioManager<H, A>,
    handle: &'a mut A::Handle,
}

/// Input side of a managed pin
pub struct InputDriver<'a, H, A: PinAllocator> {
    manager: &'a mut GpioManager<H, A>,
    handle: &'a A::Handle,
}

impl<H: GpioHal, A: PinAllocator> GpioManager<H, A> {
    /// Borrow `handle` as an [`OutputPin`]. The direction is left unchanged.
    pub fn output<'a>(&'a mut self, handle: &'a mut A::Handle) -> OutputDriver<'a, H, A> {
        OutputDriver {
            manager: self,
            handle,
        }
    }

    /// Borrow `handle` as an [`InputPin`]
    pub fn input<'a>(&'a mut self, handle: &'a A::Handle) -> InputDriver<'a, H, A> {
        InputDriver {
            manager: self,
            handle,
        }
    }
}

impl<H: GpioHal, A: PinAllocator> ErrorType for OutputDriver<'_, H, A> {
    type Error = Infallible;
}

impl<H: GpioHal, A: PinAllocator> OutputPin for OutputDriver<'_, H, A> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.manager.set_state(self.handle, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.manager.set_state(self.handle, true);
        Ok(())
    }
}

impl<H: GpioHal, A: PinAllocator> ErrorType for InputDriver<'_, H, A> {
    type Error = Infallible;
}

impl<H: GpioHal, A: PinAllocator> InputPin for InputDriver<'_, H, A> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.manager.get_state(self.handle))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.manager.get_state(self.handle))
    }
}
