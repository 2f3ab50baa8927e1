//! Recording HAL double
//!
//! [`RecordingHal`] keeps every call it receives, in order, and answers input
//! reads from levels the test sets up front. It only uses fixed-capacity
//! `heapless` storage, so it works in `no_std` test environments too.

use heapless::{FnvIndexMap, Vec};

use crate::gpio::GpioHal;

/// One call received at the HAL boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalCall {
    SetDirection { port: u8, bit: u8, output: bool },
    SetOutput { port: u8, bit: u8, state: bool },
    GetInput { port: u8, bit: u8 },
}

/// HAL double recording up to `N` calls.
///
/// Calls past the capacity are dropped with a warning; [`overflowed`](Self::overflowed)
/// reports whether that happened.
pub struct RecordingHal<const N: usize = 32> {
    calls: Vec<HalCall, N>,
    inputs: FnvIndexMap<(u8, u8), bool, 16>,
    overflowed: bool,
}

impl<const N: usize> RecordingHal<N> {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            inputs: FnvIndexMap::new(),
            overflowed: false,
        }
    }

    /// Level returned by later `get_input(port, bit)` calls.
    ///
    /// # Panics
    ///
    /// If more than 16 distinct pins are given input levels.
    pub fn set_input(&mut self, port: u8, bit: u8, level: bool) {
        if self.inputs.insert((port, bit), level).is_err() {
            panic!("RecordingHal supports at most 16 input pins");
        }
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> &[HalCall] {
        &self.calls
    }

    /// Forget recorded calls; input levels are kept
    pub fn clear(&mut self) {
        self.calls.clear();
        self.overflowed = false;
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Recorded `SetOutput` calls as `(port, bit, state)`
    pub fn outputs(&self) -> impl Iterator<Item = (u8, u8, bool)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            HalCall::SetOutput { port, bit, state } => Some((port, bit, state)),
            _ => None,
        })
    }

    /// Recorded `SetDirection` calls as `(port, bit, output)`
    pub fn directions(&self) -> impl Iterator<Item = (u8, u8, bool)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            HalCall::SetDirection { port, bit, output } => Some((port, bit, output)),
            _ => None,
        })
    }

    fn record(&mut self, call: HalCall) {
        if self.calls.push(call).is_err() {
            log::warn!("RecordingHal full, dropping {:?}", call);
            self.overflowed = true;
        }
    }
}

impl<const N: usize> Default for RecordingHal<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> GpioHal for RecordingHal<N> {
    fn set_direction(&mut self, port: u8, bit: u8, output: bool) {
        self.record(HalCall::SetDirection { port, bit, output });
    }

    fn set_output(&mut self, port: u8, bit: u8, state: bool) {
        self.record(HalCall::SetOutput { port, bit, state });
    }

    fn get_input(&mut self, port: u8, bit: u8) -> bool {
        self.record(HalCall::GetInput { port, bit });
        self.inputs.get(&(port, bit)).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut hal: RecordingHal = RecordingHal::new();
        hal.set_direction(1, 7, true);
        hal.set_output(1, 7, false);
        assert_eq!(
            hal.calls(),
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
            ]
        );
    }

    #[test]
    fn test_unknown_input_reads_low() {
        let mut hal: RecordingHal = RecordingHal::new();
        assert!(!hal.get_input(9, 9));
        hal.set_input(9, 9, true);
        assert!(hal.get_input(9, 9));
    }

    #[test]
    fn test_overflow_is_flagged() {
        let mut hal = RecordingHal::<1>::new();
        hal.set_output(0, 0, true);
        hal.set_output(0, 0, false);
        assert_eq!(hal.calls().len(), 1);
        assert!(hal.overflowed());
    }
}
