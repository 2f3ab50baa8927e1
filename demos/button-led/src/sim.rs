//! Simulated GPIO target for running the demo on a host

use std::collections::HashMap;

use hal::GpioHal;

/// Host-side stand-in for the GPIO registers.
///
/// Every input pin reads as a button that changes level every `press_every`
/// reads. Output pins read back the level last driven on them.
pub struct SimHal {
    press_every: u64,
    reads: u64,
    outputs: HashMap<(u8, u8), bool>,
}

impl SimHal {
    pub fn new(press_every: u64) -> Self {
        Self {
            press_every: press_every.max(1),
            reads: 0,
            outputs: HashMap::new(),
        }
    }

    /// Level last driven on `(port, bit)`, if it is an output
    pub fn output(&self, port: u8, bit: u8) -> Option<bool> {
        self.outputs.get(&(port, bit)).copied()
    }
}

impl GpioHal for SimHal {
    fn set_direction(&mut self, port: u8, bit: u8, output: bool) {
        if output {
            self.outputs.entry((port, bit)).or_insert(false);
        } else {
            self.outputs.remove(&(port, bit));
        }
        log::debug!("sim: P{port}.{bit} direction output={output}");
    }

    fn set_output(&mut self, port: u8, bit: u8, state: bool) {
        let previous = self.outputs.insert((port, bit), state);
        if previous != Some(state) {
            log::info!("P{port}.{bit} {}", if state { "ON" } else { "OFF" });
        }
    }

    fn get_input(&mut self, port: u8, bit: u8) -> bool {
        if let Some(level) = self.output(port, bit) {
            return level;
        }
        self.reads += 1;
        (self.reads / self.press_every) % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_toggles_every_period() {
        let mut sim = SimHal::new(2);
        let levels: Vec<_> = (0..6).map(|_| sim.get_input(2, 3)).collect();
        assert_eq!(levels, [false, true, true, false, false, true]);
    }

    #[test]
    fn output_reads_back() {
        let mut sim = SimHal::new(1);
        sim.set_direction(1, 7, true);
        sim.set_output(1, 7, true);
        assert!(sim.get_input(1, 7));
        assert_eq!(sim.output(1, 7), Some(true));
    }
}
