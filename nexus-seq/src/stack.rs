//! LIFO stack over [`SeqList`].
//!
//! Push and pop both work at the list front, so last in is first out.

use core::cmp::Ordering;

use crate::{AllocCounter, Iter, ListStorage, SeqList};

/// A last-in first-out stack.
///
/// # Example
///
/// ```
/// use nexus_seq::Stack;
///
/// let mut stack: Stack<&str> = Stack::new();
/// stack.push("a");
/// stack.push("b");
///
/// assert_eq!(stack.peek(), &"b");
/// assert_eq!(stack.pop(), "b");
/// assert_eq!(stack.pop(), "a");
/// assert!(stack.is_empty());
/// assert_eq!(stack.try_pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    list: SeqList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack registered with [`AllocCounter::global`].
    pub fn new() -> Self {
        Self {
            list: SeqList::new(),
        }
    }

    /// Creates an empty stack registered with `counter`.
    pub fn with_counter(counter: AllocCounter) -> Self {
        Self {
            list: SeqList::with_counter(counter),
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes a value onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        self.list.pop_front().expect("pop on an empty stack")
    }

    /// Removes and returns the top value, or `None` if empty.
    #[inline]
    pub fn try_pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns the top value without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    pub fn peek(&self) -> &T {
        self.list.front().expect("peek on an empty stack")
    }

    /// Returns the top value without removing it, or `None` if empty.
    #[inline]
    pub fn try_peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns an iterator from top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, ListStorage<T>, u32> {
        self.list.iter()
    }

    /// Returns the counter this stack reports allocations to.
    #[inline]
    pub fn counter(&self) -> &AllocCounter {
        self.list.counter()
    }

    /// Frees every element and the underlying list.
    pub fn destroy(self) {
        self.list.destroy();
    }

    /// Sorts the stack with a second, temporary stack.
    ///
    /// Each value popped from `self` is pushed onto the temporary stack after
    /// moving back every temporary value that compares strictly greater.
    /// When `self` runs dry the temporary stack holds the result and becomes
    /// the new contents.
    ///
    /// Afterwards the bottom-to-top order is ascending, so `pop` yields the
    /// greatest element first. Equal elements are never carried past each
    /// other by the transfer loop. O(n^2) comparisons in the worst case.
    ///
    /// ```
    /// use nexus_seq::Stack;
    ///
    /// let mut stack: Stack<u32> = Stack::new();
    /// for n in [3, 1, 2] {
    ///     stack.push(n);
    /// }
    ///
    /// stack.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = Stack::with_counter(self.counter().clone());

        while let Some(current) = self.try_pop() {
            while let Some(top) = sorted.try_peek() {
                if compare(top, &current) != Ordering::Greater {
                    break;
                }
                self.push(sorted.pop());
            }
            sorted.push(current);
        }

        core::mem::swap(self, &mut sorted);
    }

    /// Sorts the stack by a key extracted from each element.
    ///
    /// See [`sort_by`](Self::sort_by) for the algorithm and resulting order.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, ListStorage<T>, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted() -> (AllocCounter, Stack<u64>) {
        let counter = AllocCounter::new();
        let stack = Stack::with_counter(counter.clone());
        (counter, stack)
    }

    #[test]
    fn new_is_empty() {
        let (counter, stack) = counted();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(counter.live(), 1);
    }

    #[test]
    fn lifo_order() {
        let (_, mut stack) = counted();
        for i in 1..=5 {
            stack.push(i);
        }

        let popped: Vec<_> = (0..5).map(|_| stack.pop()).collect();
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let (counter, mut stack) = counted();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(), &2);
        assert_eq!(stack.try_peek(), Some(&2));
        assert_eq!(stack.len(), 2);
        assert_eq!(counter.live(), 3);
    }

    #[test]
    #[should_panic(expected = "pop on an empty stack")]
    fn pop_empty_panics() {
        let (_, mut stack) = counted();
        stack.pop();
    }

    #[test]
    #[should_panic(expected = "peek on an empty stack")]
    fn peek_empty_panics() {
        let (_, stack) = counted();
        stack.peek();
    }

    #[test]
    fn try_variants_on_empty() {
        let (_, mut stack) = counted();
        assert_eq!(stack.try_pop(), None);
        assert_eq!(stack.try_peek(), None);
    }

    #[test]
    fn destroy_balances_counter() {
        let (counter, mut stack) = counted();
        stack.push(1);
        stack.push(2);
        assert_eq!(counter.live(), 3);

        stack.destroy();
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn sort_numbers() {
        let (counter, mut stack) = counted();
        for n in [5, 1, 4, 2, 3] {
            stack.push(n);
        }

        stack.sort_by_key(|n| *n);

        let top_down: Vec<_> = stack.iter().copied().collect();
        assert_eq!(top_down, vec![5, 4, 3, 2, 1]);
        // Temporary stack handle was released, nodes are unchanged
        assert_eq!(counter.live(), 6);
    }

    #[test]
    fn sort_keeps_equal_keys_in_transfer_order() {
        let counter = AllocCounter::new();
        let mut stack = Stack::with_counter(counter);
        stack.push((1, 'a'));
        stack.push((2, 'b'));
        stack.push((1, 'c'));

        stack.sort_by_key(|task| task.0);

        let popped: Vec<_> = (0..3).map(|_| stack.pop()).collect();
        assert_eq!(popped, vec![(2, 'b'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn sort_by_name() {
        let mut stack = Stack::with_counter(AllocCounter::new());
        for (n, name) in [(1, "delta"), (2, "alpha"), (3, "charlie"), (4, "bravo")] {
            stack.push((n, name.to_string()));
        }

        stack.sort_by(|a, b| a.1.cmp(&b.1));

        let names: Vec<_> = stack.iter().map(|t| t.1.as_str()).collect();
        assert_eq!(names, vec!["delta", "charlie", "bravo", "alpha"]);
    }

    #[test]
    fn sort_empty_and_single() {
        let (_, mut stack) = counted();
        stack.sort_by_key(|n| *n);
        assert!(stack.is_empty());

        stack.push(9);
        stack.sort_by_key(|n| *n);
        assert_eq!(stack.pop(), 9);
    }

    #[test]
    fn sort_already_sorted_and_reversed() {
        let (_, mut stack) = counted();
        for n in 1..=6 {
            stack.push(n);
        }
        stack.sort_by_key(|n| *n);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![6, 5, 4, 3, 2, 1]);

        let (_, mut stack) = counted();
        for n in (1..=6).rev() {
            stack.push(n);
        }
        stack.sort_by_key(|n| *n);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![6, 5, 4, 3, 2, 1]);
    }
}
