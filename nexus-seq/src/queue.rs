//! FIFO queue over [`SeqList`].
//!
//! Values are enqueued at the back and dequeued from the front.

use crate::{AllocCounter, Iter, ListStorage, SeqList};

/// A first-in first-out queue.
///
/// Besides the list length, the queue keeps an explicit `empty` flag that is
/// cleared on every enqueue and recomputed after every dequeue. The two always
/// agree; the flag is what [`is_empty`](Self::is_empty) reports.
///
/// # Example
///
/// ```
/// use nexus_seq::Queue;
///
/// let mut queue: Queue<u32> = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), &1);
/// assert_eq!(queue.dequeue(), 1);
/// assert_eq!(queue.dequeue(), 2);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    list: SeqList<T>,
    empty: bool,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue registered with [`AllocCounter::global`].
    pub fn new() -> Self {
        Self {
            list: SeqList::new(),
            empty: true,
        }
    }

    /// Creates an empty queue registered with `counter`.
    pub fn with_counter(counter: AllocCounter) -> Self {
        Self {
            list: SeqList::with_counter(counter),
            empty: true,
        }
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.empty, self.list.is_empty(), "empty flag out of sync");
        self.empty
    }

    /// Appends a value at the back.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
        self.empty = false;
    }

    /// Removes and returns the front value.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().expect("dequeue on an empty queue")
    }

    /// Removes and returns the front value, or `None` if empty.
    #[inline]
    pub fn try_dequeue(&mut self) -> Option<T> {
        let value = self.list.pop_front()?;
        self.empty = self.list.is_empty();
        Some(value)
    }

    /// Returns the front value without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn peek(&self) -> &T {
        self.try_peek().expect("peek on an empty queue")
    }

    /// Returns the front value without removing it, or `None` if empty.
    #[inline]
    pub fn try_peek(&self) -> Option<&T> {
        if self.empty {
            return None;
        }
        self.list.front()
    }

    /// Returns an iterator from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, ListStorage<T>, u32> {
        self.list.iter()
    }

    /// Returns the counter this queue reports allocations to.
    #[inline]
    pub fn counter(&self) -> &AllocCounter {
        self.list.counter()
    }

    /// Frees every element and the underlying list.
    pub fn destroy(self) {
        self.list.destroy();
    }

    #[inline]
    pub(crate) fn list_mut(&mut self) -> &mut SeqList<T> {
        &mut self.list
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, ListStorage<T>, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted() -> (AllocCounter, Queue<u64>) {
        let counter = AllocCounter::new();
        let queue = Queue::with_counter(counter.clone());
        (counter, queue)
    }

    #[test]
    fn new_is_empty() {
        let (_, queue) = counted();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.try_peek(), None);
    }

    #[test]
    fn fifo_order() {
        let (_, mut queue) = counted();
        for i in 1..=5 {
            queue.enqueue(i);
        }

        let out: Vec<_> = (0..5).map(|_| queue.dequeue()).collect();
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_flag_tracks_length() {
        let (_, mut queue) = counted();

        queue.enqueue(1);
        assert!(!queue.is_empty());
        queue.enqueue(2);

        queue.dequeue();
        assert!(!queue.is_empty());
        queue.dequeue();
        assert!(queue.is_empty());

        queue.enqueue(3);
        assert!(!queue.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let (counter, mut queue) = counted();
        queue.enqueue(7);
        queue.enqueue(8);

        assert_eq!(queue.peek(), &7);
        assert_eq!(queue.len(), 2);
        assert_eq!(counter.live(), 3);
    }

    #[test]
    #[should_panic(expected = "dequeue on an empty queue")]
    fn dequeue_empty_panics() {
        let (_, mut queue) = counted();
        queue.dequeue();
    }

    #[test]
    #[should_panic(expected = "peek on an empty queue")]
    fn peek_empty_panics() {
        let (_, queue) = counted();
        queue.peek();
    }

    #[test]
    fn try_dequeue_on_empty_keeps_flag() {
        let (_, mut queue) = counted();
        assert_eq!(queue.try_dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn interleaved_enqueue_dequeue() {
        let (_, mut queue) = counted();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), 1);
        queue.enqueue(3);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn destroy_balances_counter() {
        let (counter, mut queue) = counted();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(counter.live(), 4);

        queue.destroy();
        assert_eq!(counter.live(), 0);
    }
}
