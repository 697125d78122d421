//! Live allocation counter.
//!
//! Every list handle and every list node registers itself with an
//! [`AllocCounter`] on creation and deregisters on destruction. Tests and demo
//! binaries read the counter to confirm that everything allocated was freed.
//!
//! Lists built with [`SeqList::new`](crate::SeqList::new) share the
//! process-wide counter returned by [`AllocCounter::global`]. Tests that run
//! in parallel should inject their own instance with
//! [`SeqList::with_counter`](crate::SeqList::with_counter) so their readings
//! are not disturbed by other threads.
//!
//! # Example
//!
//! ```
//! use nexus_seq::{AllocCounter, SeqList};
//!
//! let counter = AllocCounter::new();
//! let mut list: SeqList<u32> = SeqList::with_counter(counter.clone());
//! list.push_back(1);
//! list.push_back(2);
//! assert_eq!(counter.live(), 3); // handle + two nodes
//!
//! list.destroy();
//! assert_eq!(counter.live(), 0);
//! ```

use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared handle to an atomic count of live allocations.
///
/// Cloning is cheap and every clone observes the same count.
#[derive(Debug, Clone, Default)]
pub struct AllocCounter {
    live: Arc<AtomicUsize>,
}

impl AllocCounter {
    /// Creates an isolated counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide counter.
    pub fn global() -> &'static AllocCounter {
        static GLOBAL: OnceLock<AllocCounter> = OnceLock::new();
        GLOBAL.get_or_init(AllocCounter::new)
    }

    /// Returns the number of live allocations.
    #[inline]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Resets the count to zero.
    ///
    /// Intended for the start of a test run or demo section. Allocations that
    /// are still live keep releasing against the counter afterwards.
    pub fn reset(&self) {
        self.live.store(0, Ordering::Relaxed);
    }

    /// Returns `true` if both handles observe the same count.
    #[inline]
    pub fn same_as(&self, other: &AllocCounter) -> bool {
        Arc::ptr_eq(&self.live, &other.live)
    }

    #[inline]
    pub(crate) fn acquire(&self) {
        self.live.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn release(&self, n: usize) {
        // Saturate so a reset() while allocations are live cannot wrap
        let _ = self
            .live
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |live| {
                Some(live.saturating_sub(n))
            });
    }
}
