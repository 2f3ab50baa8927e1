//! Hardware Abstraction Layer (HAL) boundary for GPIO
//!
//! This crate names the three register-level operations the GPIO handle
//! manager calls into. It does not implement them for any target: board
//! crates provide a [`gpio::GpioHal`] implementation, and the `mock` feature
//! provides a recording double for tests.

#![no_std]

pub mod gpio;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export commonly used types
pub use gpio::GpioHal;
#[cfg(feature = "mock")]
pub use mock::{HalCall, RecordingHal};
