//! Priority queue over [`Queue`] with stable insertion.
//!
//! Ordering is injected as a [`Priority`] implementation. After every
//! enqueue the new value walks toward the front by adjacent swaps while it
//! outranks its predecessor, so the queue stays sorted front (highest) to
//! back (lowest) and values of equal rank keep their arrival order.
//!
//! # Orderings
//!
//! | Ordering | Behaviour |
//! |----------|-----------|
//! | [`Fifo`] | No ordering; a plain FIFO queue |
//! | [`LowestFirst`] | Smallest key dequeued first |
//! | [`HighestFirst`] | Largest key dequeued first |
//! | any `Fn(&T, &T) -> bool` | Custom "a before b" predicate |
//!
//! # Example
//!
//! ```
//! use nexus_seq::{HighestFirst, PriorityQueue};
//!
//! let mut pq = PriorityQueue::new(HighestFirst::by(|job: &(u8, &'static str)| job.0));
//! pq.enqueue((1, "backup"));
//! pq.enqueue((4, "page oncall"));
//! pq.enqueue((2, "rotate logs"));
//!
//! assert_eq!(pq.dequeue().1, "page oncall");
//! assert_eq!(pq.dequeue().1, "rotate logs");
//! assert_eq!(pq.dequeue().1, "backup");
//! ```

use core::fmt;

use crate::{AllocCounter, Iter, ListStorage, Queue};

/// Ordering capability for [`PriorityQueue`].
///
/// `higher_priority(a, b)` returns `true` when `a` must be dequeued before
/// `b`. It should be a strict relation: returning `true` for equal ranks
/// lets a newcomer jump ahead of values that arrived earlier.
pub trait Priority<T> {
    /// Returns `true` if `a` outranks `b`.
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// No ordering: values leave in arrival order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fifo;

impl<T> Priority<T> for Fifo {
    #[inline]
    fn higher_priority(&self, _a: &T, _b: &T) -> bool {
        false
    }
}

/// Lowest key first.
///
/// Ties keep arrival order.
#[derive(Clone, Copy)]
pub struct LowestFirst<F> {
    key: F,
}

impl<F> LowestFirst<F> {
    /// Orders by the key `key` extracts, smallest first.
    pub const fn by(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Priority<T> for LowestFirst<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        (self.key)(a) < (self.key)(b)
    }
}

impl<F> fmt::Debug for LowestFirst<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LowestFirst").finish_non_exhaustive()
    }
}

/// Highest key first.
///
/// Ties keep arrival order.
#[derive(Clone, Copy)]
pub struct HighestFirst<F> {
    key: F,
}

impl<F> HighestFirst<F> {
    /// Orders by the key `key` extracts, largest first.
    pub const fn by(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Priority<T> for HighestFirst<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        (self.key)(a) > (self.key)(b)
    }
}

impl<F> fmt::Debug for HighestFirst<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighestFirst").finish_non_exhaustive()
    }
}

/// A queue kept sorted by priority on insertion.
///
/// Enqueue is O(n) in the distance the new value travels; dequeue is O(1)
/// and always yields the current highest-priority value.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = Fifo> {
    queue: Queue<T>,
    order: P,
}

impl<T> PriorityQueue<T, Fifo> {
    /// Creates a priority queue with no ordering; it behaves as a FIFO queue.
    pub fn fifo() -> Self {
        Self::new(Fifo)
    }
}

impl<T> Default for PriorityQueue<T, Fifo> {
    fn default() -> Self {
        Self::fifo()
    }
}

impl<T, P: Priority<T>> PriorityQueue<T, P> {
    /// Creates an empty priority queue registered with [`AllocCounter::global`].
    pub fn new(order: P) -> Self {
        Self {
            queue: Queue::new(),
            order,
        }
    }

    /// Creates an empty priority queue registered with `counter`.
    pub fn with_counter(order: P, counter: AllocCounter) -> Self {
        Self {
            queue: Queue::with_counter(counter),
            order,
        }
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the ordering in use.
    #[inline]
    pub fn order(&self) -> &P {
        &self.order
    }

    /// Inserts a value behind every value it does not outrank.
    pub fn enqueue(&mut self, value: T) {
        self.queue.enqueue(value);

        let order = &self.order;
        self.queue
            .list_mut()
            .sift_back(|new, prev| order.higher_priority(new, prev));
    }

    /// Removes and returns the highest-priority value.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> T {
        self.queue.dequeue()
    }

    /// Removes and returns the highest-priority value, or `None` if empty.
    #[inline]
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.queue.try_dequeue()
    }

    /// Returns the highest-priority value without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn peek(&self) -> &T {
        self.queue.peek()
    }

    /// Returns the highest-priority value without removing it, or `None` if
    /// empty.
    #[inline]
    pub fn try_peek(&self) -> Option<&T> {
        self.queue.try_peek()
    }

    /// Returns an iterator in dequeue order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, ListStorage<T>, u32> {
        self.queue.iter()
    }

    /// Returns the counter this queue reports allocations to.
    #[inline]
    pub fn counter(&self) -> &AllocCounter {
        self.queue.counter()
    }

    /// Frees every element and the underlying list.
    pub fn destroy(self) {
        self.queue.destroy();
    }
}
