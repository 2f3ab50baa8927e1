#![no_std]
#![forbid(unsafe_code)]

//! # GPIO Core
//!
//! Core types shared by the GPIO handle manager: the per-pin record that
//! every allocation strategy stores, the pin direction, and the error type
//! returned when a handle cannot be created.

use core::fmt;

pub mod pin;

pub use pin::*;

#[cfg(feature = "std")]
extern crate std;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the GPIO crates
pub type GpioResult<T> = Result<T, GpioError>;

/// Error types for GPIO handle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Heap allocation for a new handle failed
    OutOfMemory,
    /// Every slot of the static pool is in use
    PoolExhausted,
    /// Pin is configured as input and cannot be driven
    NotOutput,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::OutOfMemory => write!(f, "Out of memory for GPIO handle"),
            GpioError::PoolExhausted => write!(f, "GPIO pool exhausted"),
            GpioError::NotOutput => write!(f, "GPIO pin is not configured as output"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GpioError {}

#[cfg(feature = "defmt")]
impl defmt::Format for GpioError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GpioError::OutOfMemory => defmt::write!(fmt, "OutOfMemory"),
            GpioError::PoolExhausted => defmt::write!(fmt, "PoolExhausted"),
            GpioError::NotOutput => defmt::write!(fmt, "NotOutput"),
        }
    }
}

impl GpioError {
    /// Whether the error came from a failed `create`
    pub const fn is_allocation_failure(self) -> bool {
        matches!(self, GpioError::OutOfMemory | GpioError::PoolExhausted)
    }
}
