#![no_std]
#![allow(unsafe_code)] // Heap blocks are allocated fallibly through the raw allocator

//! # GPIO Memory Management
//!
//! Allocation strategies for GPIO handles. Both strategies implement
//! [`PinAllocator`], so the handle manager can be composed with either one
//! without recompiling:
//!
//! - [`StaticPool`]: fixed array of `N` slots, first-fit, never released.
//! - [`SharedPool`]: the same pool behind a critical section, usable as a `static`.
//! - [`HeapAllocator`]: one heap block per handle (feature `alloc`).

#[cfg(feature = "alloc")]
extern crate alloc;

use gpio_core::{GpioResult, PinRecord};

#[cfg(feature = "alloc")]
pub mod heap;
pub mod pool;

#[cfg(feature = "alloc")]
pub use heap::*;
pub use pool::*;

/// Default number of slots in a static pool
pub const DEFAULT_POOL_CAPACITY: usize = 10;

/// Static pool with the default capacity
pub type DefaultPool = StaticPool<DEFAULT_POOL_CAPACITY>;

/// Storage strategy for GPIO handles.
///
/// A handle is opaque to callers; the pin record behind it is only reached
/// through [`record`](PinAllocator::record) and [`store`](PinAllocator::store).
pub trait PinAllocator {
    /// Handle given to the caller on a successful allocation
    type Handle;

    /// Reserve storage for a pin and initialise it as an input.
    fn allocate(&mut self, port: u8, bit: u8) -> GpioResult<Self::Handle>;

    /// Copy of the record behind `handle`.
    fn record(&self, handle: &Self::Handle) -> PinRecord;

    /// Overwrite the record behind `handle`.
    fn store(&mut self, handle: &mut Self::Handle, record: PinRecord);

    /// Current allocation statistics
    fn stats(&self) -> PoolStats;
}

/// Allocation statistics for debugging and monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Total number of handles the allocator can hold
    pub capacity: usize,
    /// Number of handles currently allocated
    pub used: usize,
    /// Highest number of handles ever allocated at once
    pub peak_used: usize,
}

impl PoolStats {
    /// Create new statistics for an empty allocator
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            used: 0,
            peak_used: 0,
        }
    }

    /// Update statistics after allocation
    pub fn on_alloc(&mut self) {
        self.used += 1;
        if self.used > self.peak_used {
            self.peak_used = self.used;
        }
    }

    /// Update statistics after a handle is released
    pub fn on_release(&mut self) {
        self.used = self.used.saturating_sub(1);
    }

    /// Number of handles that can still be allocated
    pub const fn free(&self) -> usize {
        self.capacity - self.used
    }

    /// Check if every slot is in use
    pub const fn is_full(&self) -> bool {
        self.used >= self.capacity
    }

    /// Check if nothing is allocated
    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Get utilization as a percentage (0-100)
    pub fn utilization(&self) -> u8 {
        if self.capacity == 0 {
            0
        } else {
            ((self.used * 100) / self.capacity) as u8
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PoolStats {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PoolStats{{ capacity: {}, used: {}, peak: {} }}",
            self.capacity,
            self.used,
            self.peak_used
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_stats() {
        let mut stats = PoolStats::new(10);

        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.free(), 10);
        assert!(stats.is_empty());
        assert!(!stats.is_full());

        stats.on_alloc();
        stats.on_alloc();
        assert_eq!(stats.used, 2);
        assert_eq!(stats.free(), 8);
        assert_eq!(stats.utilization(), 20);

        stats.on_release();
        assert_eq!(stats.used, 1);
        assert_eq!(stats.peak_used, 2);
    }

    #[test]
    fn test_zero_capacity_stats() {
        let stats = PoolStats::new(0);
        assert!(stats.is_full());
        assert_eq!(stats.utilization(), 0);
    }
}
