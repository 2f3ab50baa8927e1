#![cfg_attr(not(test), no_std)]

//! # GPIO Handle Manager
//!
//! Creates GPIO handles over `(port, bit)` pairs and forwards direction and
//! state operations to a [`GpioHal`](hal::GpioHal) implementation.
//!
//! The manager is generic over its allocation strategy, so heap-backed and
//! pool-backed handles share one API:
//!
//! ```
//! use gpio_handle::GpioManager;
//! use gpio_mem::StaticPool;
//! use hal::RecordingHal;
//!
//! let mut gpio = GpioManager::new(RecordingHal::<8>::new(), StaticPool::<2>::new());
//! let mut led = gpio.create(1, 7).unwrap();
//! gpio.set_direction(&mut led, true);
//! gpio.set_state(&mut led, true);
//! assert_eq!(gpio.hal().outputs().collect::<Vec<_>>(), [(1, 7, true)]);
//! ```
//!
//! ## Module Overview
//! - [`manager`] – [`GpioManager`] and its pin operations.
//! - [`digital`] – `embedded-hal` digital pin adapters over managed handles.

pub mod digital;
pub mod manager;

pub use digital::{InputDriver, OutputDriver};
pub use gpio_core::{Direction, GpioError, GpioResult, PinRecord};
pub use gpio_mem::{PinAllocator, PoolStats, SharedPool, SlotId, StaticPool};
#[cfg(feature = "alloc")]
pub use gpio_mem::{HeapAllocator, HeapPin};
pub use manager::GpioManager;

#[cfg(test)]
mod tests;
