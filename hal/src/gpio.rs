//! GPIO (General Purpose Input/Output) access boundary

/// Register-level GPIO access for one target.
///
/// Pins are addressed by `(port, bit)`. Values are passed as booleans:
/// `true` means output for directions and high for levels. None of the
/// operations report failure.
pub trait GpioHal {
    /// Configure the physical pin as output (`true`) or input (`false`)
    fn set_direction(&mut self, port: u8, bit: u8, output: bool);

    /// Drive the output level. Callers only do this on output pins.
    fn set_output(&mut self, port: u8, bit: u8, state: bool);

    /// Read the input level. Callers may do this on pins in either mode.
    fn get_input(&mut self, port: u8, bit: u8) -> bool;
}

impl<T: GpioHal + ?Sized> GpioHal for &mut T {
    fn set_direction(&mut self, port: u8, bit: u8, output: bool) {
        (**self).set_direction(port, bit, output)
    }

    fn set_output(&mut self, port: u8, bit: u8, state: bool) {
        (**self).set_output(port, bit, state)
    }

    fn get_input(&mut self, port: u8, bit: u8) -> bool {
        (**self).get_input(port, bit)
    }
}
