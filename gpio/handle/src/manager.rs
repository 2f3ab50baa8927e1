//! GPIO handle manager

use gpio_core::{Direction, GpioError, GpioResult, PinRecord};
use gpio_mem::{PinAllocator, PoolStats};
use hal::GpioHal;

/// Owns the HAL and the handle storage, and routes pin operations between them.
///
/// Handles are created with [`create`](Self::create) and passed back by
/// mutable reference. Passing a handle that came from a different manager is
/// a caller error; pool handles may then panic on an out-of-range slot.
pub struct GpioManager<H, A> {
    hal: H,
    allocator: A,
}

impl<H, A> GpioManager<H, A>
where
    H: GpioHal,
    A: PinAllocator,
{
    /// Compose a manager from a HAL implementation and an allocation strategy
    pub fn new(hal: H, allocator: A) -> Self {
        Self { hal, allocator }
    }

    /// Create a handle for `(port, bit)`, configured as input.
    ///
    /// No HAL call is made. Fails only when the allocator is exhausted.
    pub fn create(&mut self, port: u8, bit: u8) -> GpioResult<A::Handle> {
        self.allocator.allocate(port, bit)
    }

    /// Store the direction and forward it to the HAL.
    pub fn set_direction(&mut self, handle: &mut A::Handle, output: bool) {
        let mut pin = self.allocator.record(handle);
        pin.direction = Direction::from_output(output);
        self.allocator.store(handle, pin);

        log::debug!("P{}.{} -> {}", pin.port, pin.bit, pin.direction);
        self.hal.set_direction(pin.port, pin.bit, output);
    }

    /// Drive the pin level. Ignored while the pin is an input.
    pub fn set_state(&mut self, handle: &mut A::Handle, state: bool) {
        let pin = self.allocator.record(handle);
        if pin.is_output() {
            log::trace!("P{}.{} <- {}", pin.port, pin.bit, state);
            self.hal.set_output(pin.port, pin.bit, state);
        } else {
            log::trace!("P{}.{} is an input, ignoring write", pin.port, pin.bit);
        }
    }

    /// Like [`set_state`](Self::set_state), but reports writes to an input pin.
    pub fn try_set_state(&mut self, handle: &mut A::Handle, state: bool) -> GpioResult<()> {
        let pin = self.allocator.record(handle);
        if !pin.is_output() {
            return Err(GpioError::NotOutput);
        }
        self.hal.set_output(pin.port, pin.bit, state);
        Ok(())
    }

    /// Read the pin level from the HAL, whatever its direction.
    pub fn get_state(&mut self, handle: &A::Handle) -> bool {
        let pin = self.allocator.record(handle);
        self.hal.get_input(pin.port, pin.bit)
    }

    /// Fields behind `handle`
    pub fn pin(&self, handle: &A::Handle) -> PinRecord {
        self.allocator.record(handle)
    }

    /// Current direction of `handle`
    pub fn direction(&self, handle: &A::Handle) -> Direction {
        self.allocator.record(handle).direction
    }

    pub fn stats(&self) -> PoolStats {
        self.allocator.stats()
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Needed for strategy-specific operations such as
    /// [`HeapAllocator::release`](gpio_mem::HeapAllocator::release).
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Split the manager back into its HAL and allocator
    pub fn into_parts(self) -> (H, A) {
        (self.hal, self.allocator)
    }
}
