//! Heap-backed GPIO handles

use alloc::alloc::{alloc as raw_alloc, Layout};
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use gpio_core::{GpioError, GpioResult, PinRecord};

use crate::{PinAllocator, PoolStats};

/// A pin record in its own heap block.
///
/// Move-only; dropping it frees the block and removes it from the owning
/// allocator's live count.
#[derive(Debug)]
pub struct HeapPin {
    record: Box<PinRecord>,
    live: Arc<AtomicUsize>,
}

impl HeapPin {
    /// Address of the backing block, for identity checks
    pub fn as_ptr(&self) -> *const PinRecord {
        &*self.record
    }
}

impl Drop for HeapPin {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Allocates one heap block per handle. No upper bound besides memory.
#[derive(Debug)]
pub struct HeapAllocator {
    live: Arc<AtomicUsize>,
    peak: usize,
}

impl Default for HeapAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapAllocator {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicUsize::new(0)),
            peak: 0,
        }
    }

    /// Free the block behind `pin`. Same as dropping it.
    pub fn release(&mut self, pin: HeapPin) {
        log::debug!("releasing heap pin P{}.{}", pin.record.port, pin.record.bit);
        drop(pin);
    }
}

/// `Box::new` aborts when the allocator fails; go through the raw
/// allocator so exhaustion comes back as an error instead.
fn try_box(record: PinRecord) -> GpioResult<Box<PinRecord>> {
    let layout = Layout::new::<PinRecord>();
    // SAFETY: PinRecord is not zero-sized, so `layout` has a non-zero size.
    let raw = unsafe { raw_alloc(layout) }.cast::<PinRecord>();
    let ptr = NonNull::new(raw).ok_or(GpioError::OutOfMemory)?;
    // SAFETY: `ptr` was just allocated with the layout of PinRecord by the
    // global allocator, which is what Box expects to free it with.
    unsafe {
        ptr.as_ptr().write(record);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

impl PinAllocator for HeapAllocator {
    type Handle = HeapPin;

    fn allocate(&mut self, port: u8, bit: u8) -> GpioResult<HeapPin> {
        match try_box(PinRecord::new(port, bit)) {
            Ok(record) => {
                let used = self.live.fetch_add(1, Ordering::AcqRel) + 1;
                self.peak = self.peak.max(used);
                log::debug!("heap pin P{}.{} allocated", port, bit);
                Ok(HeapPin {
                    record,
                    live: Arc::clone(&self.live),
                })
            }
            Err(err) => {
                log::warn!("heap allocation failed for P{}.{}", port, bit);
                Err(err)
            }
        }
    }

    fn record(&self, handle: &HeapPin) -> PinRecord {
        *handle.record
    }

    fn store(&mut self, handle: &mut HeapPin, record: PinRecord) {
        *handle.record = record;
    }

    fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: usize::MAX,
            used: self.live.load(Ordering::Acquire),
            peak_used: self.peak,
        }
    }
}
