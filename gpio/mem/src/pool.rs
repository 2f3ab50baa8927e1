//! Fixed-capacity pools of GPIO handles

use core::cell::RefCell;

use critical_section::Mutex;
use gpio_core::{GpioError, GpioResult, PinRecord};

use crate::{PinAllocator, PoolStats};

/// Handle into a pool: the index of the slot holding the pin.
///
/// Not `Clone`, so a slot has exactly one owner for the life of the pool.
#[derive(Debug, PartialEq, Eq)]
pub struct SlotId(usize);

impl SlotId {
    /// Index of the slot inside its pool
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// One pool entry: the pin fields plus the `used` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSlot {
    pub record: PinRecord,
    pub used: bool,
}

impl PoolSlot {
    /// Zeroed, unused slot
    pub const FREE: PoolSlot = PoolSlot {
        record: PinRecord::ZERO,
        used: false,
    };
}

/// A static arena of `N` pin slots.
///
/// Slots are handed out first-fit from index 0 and are never released, so
/// the pool fills monotonically until [`GpioError::PoolExhausted`].
pub struct StaticPool<const N: usize> {
    slots: [PoolSlot; N],
    stats: PoolStats,
}

impl<const N: usize> StaticPool<N> {
    /// Create an empty pool with every slot zeroed
    pub const fn new() -> Self {
        Self {
            slots: [PoolSlot::FREE; N],
            stats: PoolStats::new(N),
        }
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Whether slot `index` has been handed out
    pub fn is_used(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.used)
    }

    /// Read-only view of the slots
    pub fn slots(&self) -> &[PoolSlot; N] {
        &self.slots
    }

    fn claim(&mut self, port: u8, bit: u8) -> GpioResult<SlotId> {
        let index = self
            .slots
            .iter()
            .position(|slot| !slot.used)
            .ok_or(GpioError::PoolExhausted)?;

        self.slots[index] = PoolSlot {
            record: PinRecord::new(port, bit),
            used: true,
        };
        self.stats.on_alloc();
        Ok(SlotId(index))
    }
}

impl<const N: usize> Default for StaticPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PinAllocator for StaticPool<N> {
    type Handle = SlotId;

    fn allocate(&mut self, port: u8, bit: u8) -> GpioResult<SlotId> {
        let result = self.claim(port, bit);
        match &result {
            Ok(slot) => log::debug!("pool slot {} -> P{}.{}", slot.index(), port, bit),
            Err(_) => log::warn!("pool of {} slots exhausted (P{}.{})", N, port, bit),
        }
        result
    }

    fn record(&self, handle: &SlotId) -> PinRecord {
        debug_assert!(self.slots[handle.0].used);
        self.slots[handle.0].record
    }

    fn store(&mut self, handle: &mut SlotId, record: PinRecord) {
        debug_assert!(self.slots[handle.0].used);
        self.slots[handle.0].record = record;
    }

    fn stats(&self) -> PoolStats {
        self.stats
    }
}

/// A [`StaticPool`] guarded by a critical section.
///
/// The scan-and-mark step of allocation runs inside one critical section,
/// so concurrent callers never receive the same slot. Can live in a `static`:
///
/// ```
/// use gpio_mem::SharedPool;
///
/// static PINS: SharedPool<4> = SharedPool::new();
/// ```
pub struct SharedPool<const N: usize> {
    pool: Mutex<RefCell<StaticPool<N>>>,
}

impl<const N: usize> SharedPool<N> {
    /// Create an empty shared pool
    pub const fn new() -> Self {
        Self {
            pool: Mutex::new(RefCell::new(StaticPool::new())),
        }
    }

    /// Run `f` with exclusive access to the underlying pool
    pub fn with<R>(&self, f: impl FnOnce(&mut StaticPool<N>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.pool.borrow_ref_mut(cs)))
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for SharedPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PinAllocator for &SharedPool<N> {
    type Handle = SlotId;

    fn allocate(&mut self, port: u8, bit: u8) -> GpioResult<SlotId> {
        self.with(|pool| pool.allocate(port, bit))
    }

    fn record(&self, handle: &SlotId) -> PinRecord {
        self.with(|pool| pool.record(handle))
    }

    fn store(&mut self, handle: &mut SlotId, record: PinRecord) {
        self.with(|pool| pool.store(handle, record))
    }

    fn stats(&self) -> PoolStats {
        self.with(|pool| pool.stats())
    }
}
