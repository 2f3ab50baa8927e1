//! Pin record and direction

use core::fmt;

/// Direction of a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Pin is read by the core (reset state)
    #[default]
    Input,
    /// Pin is driven by the core
    Output,
}

impl Direction {
    /// `true` for [`Direction::Output`]
    pub const fn is_output(self) -> bool {
        matches!(self, Direction::Output)
    }

    /// Build a direction from the HAL's boolean encoding (`true` = output)
    pub const fn from_output(output: bool) -> Self {
        if output {
            Direction::Output
        } else {
            Direction::Input
        }
    }
}

impl From<bool> for Direction {
    fn from(output: bool) -> Self {
        Direction::from_output(output)
    }
}

impl From<Direction> for bool {
    fn from(direction: Direction) -> Self {
        direction.is_output()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

/// Fields stored behind every GPIO handle.
///
/// `port` and `bit` are kept verbatim; nothing checks them against the
/// target's real pin map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinRecord {
    /// Pin group
    pub port: u8,
    /// Pin within the group
    pub bit: u8,
    /// Last direction set through the manager
    pub direction: Direction,
}

impl PinRecord {
    /// Record for a freshly created pin: input direction
    pub const fn new(port: u8, bit: u8) -> Self {
        Self {
            port,
            bit,
            direction: Direction::Input,
        }
    }

    /// Zeroed record (port 0, bit 0, input)
    pub const ZERO: PinRecord = PinRecord::new(0, 0);

    pub const fn is_output(&self) -> bool {
        self.direction.is_output()
    }
}

impl fmt::Display for PinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}.{} ({})", self.port, self.bit, self.direction)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinRecord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "P{}.{} ({})", self.port, self.bit, self.direction);
    }
}
