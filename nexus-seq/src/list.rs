//! Doubly-linked sequential container.
//!
//! [`SeqList`] is the substrate for [`Stack`](crate::Stack),
//! [`Queue`](crate::Queue) and [`PriorityQueue`](crate::PriorityQueue). It
//! never looks inside its elements: values go in by move, come out by move or
//! by clone, and the adapters decide what ordering means.
//!
//! Nodes live in an arena owned by the list and link to each other by key.
//! The list tracks head, tail and length; length is maintained on every
//! insert and remove, never recounted.
//!
//! # Example
//!
//! ```
//! use nexus_seq::{FrontAction, SeqList};
//!
//! let mut list: SeqList<u32> = SeqList::new();
//!
//! list.push_front(10);
//! list.push_front(20);
//! list.push_front(30);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
//!
//! assert_eq!(list.get_at(1), 20);
//!
//! // Peek leaves the list intact, delete unlinks the head
//! assert_eq!(list.get_front(FrontAction::Retain), 30);
//! assert_eq!(list.get_front(FrontAction::Delete), 30);
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Indexed access
//!
//! `get_at`, `set_at` and `swap` locate a node by walking from whichever end
//! is closer: forward from the head when `index <= len / 2`, otherwise
//! backward from the tail. Access near either end is cheap; the worst case is
//! the middle at `len / 2` steps.
//!
//! ```
//! use nexus_seq::SeqList;
//!
//! let mut list: SeqList<char> = "abcde".chars().collect();
//!
//! list.set_at(3, 'x');
//! list.swap(0, 4);
//! assert_eq!(list.iter().collect::<String>(), "ebcxa");
//! ```
//!
//! # Teardown
//!
//! Dropping a list frees every node and then the handle. [`SeqList::destroy`]
//! does the same explicitly and consumes the handle, so it cannot be used
//! afterwards.

use core::fmt;
use core::marker::PhantomData;

use crate::{AllocCounter, Arena, Key, OutOfBounds, Storage};

/// Type alias for list storage backed by an [`Arena`].
pub type ListStorage<T, K = u32> = Arena<ListNode<T, K>, K>;

/// Type alias for list storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabListStorage<T> = slab::Slab<ListNode<T, usize>>;

/// A node in the list.
///
/// Wraps one element with prev/next links. Users only ever see `&T` and
/// `T`; the node layout is an implementation detail.
#[derive(Debug, Clone)]
pub struct ListNode<T, K: Key = u32> {
    data: T,
    prev: K,
    next: K,
}

impl<T, K: Key> ListNode<T, K> {
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            prev: K::NONE,
            next: K::NONE,
        }
    }
}

/// Whether [`SeqList::get_front`] keeps or removes the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontAction {
    /// Return a copy of the head and leave it in place.
    Retain,
    /// Unlink and free the head, returning its element.
    Delete,
}

/// A doubly-linked list that owns its node storage.
///
/// # Type Parameters
///
/// - `T`: Element type (no bounds; the list never inspects it)
/// - `S`: Storage type (default [`ListStorage<T>`])
/// - `K`: Key type (default `u32`)
///
/// # Example
///
/// ```
/// use nexus_seq::SeqList;
///
/// let mut list: SeqList<String> = SeqList::new();
///
/// list.push_back("b".into());
/// list.push_front("a".into());
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.front().map(String::as_str), Some("a"));
/// assert_eq!(list.back().map(String::as_str), Some("b"));
/// ```
pub struct SeqList<T, S = ListStorage<T>, K: Key = u32>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    head: K,
    tail: K,
    len: usize,
    storage: S,
    counter: AllocCounter,
    _marker: PhantomData<T>,
}

impl<T, S, K: Key> Default for SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, K: Key> SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K> + Default,
{
    /// Creates an empty list registered with [`AllocCounter::global`].
    pub fn new() -> Self {
        Self::with_counter(AllocCounter::global().clone())
    }

    /// Creates an empty list registered with `counter`.
    pub fn with_counter(counter: AllocCounter) -> Self {
        Self::with_storage(S::default(), counter)
    }
}

// =============================================================================
// Base impl
// =============================================================================

impl<T, S, K: Key> SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Creates an empty list over caller-provided storage.
    ///
    /// Useful to pre-size the arena or to plug in another [`Storage`].
    ///
    /// # Panics
    ///
    /// Panics if `storage` already holds nodes.
    pub fn with_storage(storage: S, counter: AllocCounter) -> Self {
        assert!(storage.is_empty(), "list storage must start empty");

        counter.acquire();
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            storage,
            counter,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of a list that may not exist.
    ///
    /// An absent list has length zero.
    ///
    /// ```
    /// use nexus_seq::SeqList;
    ///
    /// let list: SeqList<u8> = SeqList::new();
    /// assert_eq!(SeqList::length(Some(&list)), 0);
    /// assert_eq!(SeqList::<u8>::length(None), 0);
    /// ```
    #[inline]
    pub fn length(list: Option<&Self>) -> usize {
        list.map_or(0, Self::len)
    }

    /// Returns the counter this list reports allocations to.
    #[inline]
    pub fn counter(&self) -> &AllocCounter {
        &self.counter
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Pushes a value to the front of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        let key = self.storage.insert(ListNode::new(value));
        self.counter.acquire();

        let old_head = self.head;
        if old_head.is_some() {
            self.node_mut(old_head).prev = key;
            self.node_mut(key).next = old_head;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Pushes a value to the back of the list. O(1).
    ///
    /// On an empty list this is the same as [`push_front`](Self::push_front).
    pub fn push_back(&mut self, value: T) {
        if self.tail.is_none() {
            return self.push_front(value);
        }

        let key = self.storage.insert(ListNode::new(value));
        self.counter.acquire();

        let old_tail = self.tail;
        self.node_mut(old_tail).next = key;
        self.node_mut(key).prev = old_tail;

        self.tail = key;
        self.len += 1;
    }

    // ========================================================================
    // Front / back
    // ========================================================================

    /// Returns the head element, retaining or deleting it per `action`.
    ///
    /// With [`FrontAction::Retain`] the list is unchanged and a copy of the
    /// head is returned. With [`FrontAction::Delete`] the head node is
    /// unlinked and freed.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn get_front(&mut self, action: FrontAction) -> T
    where
        T: Clone,
    {
        assert!(self.head.is_some(), "get_front on an empty list");

        match action {
            FrontAction::Retain => self.node(self.head).data.clone(),
            FrontAction::Delete => match self.pop_front() {
                Some(value) => value,
                None => unreachable!("head checked above"),
            },
        }
    }

    /// Removes and returns the front element, or `None` if empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let node = self.take_node(self.head);
        self.head = node.next;
        if node.next.is_some() {
            self.node_mut(node.next).prev = K::NONE;
        } else {
            self.tail = K::NONE;
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Removes and returns the back element, or `None` if empty. O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }

        let node = self.take_node(self.tail);
        self.tail = node.prev;
        if node.prev.is_some() {
            self.node_mut(node.prev).next = K::NONE;
        } else {
            self.head = K::NONE;
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.node(self.head).data)
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.node(self.tail).data)
        }
    }

    // ========================================================================
    // Indexed access
    // ========================================================================

    /// Returns a reference to the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.node(self.key_at(index)).data)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out
    /// of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let key = self.key_at(index);
        Some(&mut self.node_mut(key).data)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, OutOfBounds> {
        self.get(index).ok_or(OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_at(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.check_index(index);
        self.node(self.key_at(index)).data.clone()
    }

    /// Overwrites the element at `index`, dropping the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_at(&mut self, index: usize, value: T) {
        self.check_index(index);
        let key = self.key_at(index);
        self.node_mut(key).data = value;
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`; the list is unchanged.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, OutOfBounds> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(OutOfBounds { index, len }),
        }
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// Only the payloads move; node links are untouched. No-op when `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        if a == b {
            return;
        }

        let (ka, kb) = (self.key_at(a), self.key_at(b));
        self.swap_keys(ka, kb);
    }

    /// Moves the back element toward the front by adjacent swaps.
    ///
    /// While the element has a predecessor and `before(element, predecessor)`
    /// returns `true`, the two payloads are exchanged. Returns the element's
    /// final index. The cost is proportional to the distance moved.
    ///
    /// ```
    /// use nexus_seq::SeqList;
    ///
    /// let mut list: SeqList<u32> = [1, 3, 5, 4].into_iter().collect();
    /// let at = list.sift_back(|new, prev| new < prev);
    ///
    /// assert_eq!(at, 2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn sift_back<F>(&mut self, mut before: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        assert!(self.tail.is_some(), "sift_back on an empty list");

        let mut key = self.tail;
        let mut index = self.len - 1;

        loop {
            let prev = self.node(key).prev;
            if prev.is_none() {
                break;
            }

            let (cur, pred) = self
                .storage
                .get_pair_mut(key, prev)
                .expect("linked keys are distinct and occupied");
            if !before(&cur.data, &pred.data) {
                break;
            }
            core::mem::swap(&mut cur.data, &mut pred.data);

            key = prev;
            index -= 1;
        }

        index
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes every element, front first. The list stays usable.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Frees every node and then the handle itself.
    ///
    /// Equivalent to dropping the list. After this call the counter is
    /// exactly `len + 1` lower than before.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            storage: &self.storage,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Locates the node at `index`, walking from the nearer end.
    fn key_at(&self, index: usize) -> K {
        debug_assert!(index < self.len);

        if index <= self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.node(key).next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index..self.len - 1 {
                key = self.node(key).prev;
            }
            key
        }
    }

    #[inline]
    fn check_index(&self, index: usize) {
        if index >= self.len {
            panic!(
                "{}",
                OutOfBounds {
                    index,
                    len: self.len
                }
            );
        }
    }

    #[inline]
    fn node(&self, key: K) -> &ListNode<T, K> {
        self.storage.get(key).expect("linked key is occupied")
    }

    #[inline]
    fn node_mut(&mut self, key: K) -> &mut ListNode<T, K> {
        self.storage.get_mut(key).expect("linked key is occupied")
    }

    /// Frees the node at `key` without relinking its neighbours.
    #[inline]
    fn take_node(&mut self, key: K) -> ListNode<T, K> {
        let node = self.storage.remove(key).expect("linked key is occupied");
        self.counter.release(1);
        node
    }

    fn swap_keys(&mut self, a: K, b: K) {
        let (x, y) = self
            .storage
            .get_pair_mut(a, b)
            .expect("linked keys are distinct and occupied");
        core::mem::swap(&mut x.data, &mut y.data);
    }

    /// Walks the chain in both directions and checks every structural
    /// invariant against the cached length.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        if self.len == 0 {
            assert!(self.head.is_none() && self.tail.is_none());
            return;
        }
        if self.len == 1 {
            assert_eq!(self.head, self.tail);
        }

        assert!(self.node(self.head).prev.is_none());
        assert!(self.node(self.tail).next.is_none());

        let mut forward = 0;
        let mut key = self.head;
        let mut last = K::NONE;
        while key.is_some() {
            assert_eq!(self.node(key).prev, last);
            forward += 1;
            last = key;
            key = self.node(key).next;
        }
        assert_eq!(last, self.tail);
        assert_eq!(forward, self.len);
        assert_eq!(self.storage.len(), self.len);
    }
}

impl<T, S, K: Key> Drop for SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn drop(&mut self) {
        self.clear();
        self.counter.release(1);
    }
}

impl<T, S, K: Key> Extend<T> for SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, S, K: Key> FromIterator<T> for SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone, S, K: Key> Clone for SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K> + Default,
{
    /// Clones the elements into a new list on the same counter.
    fn clone(&self) -> Self {
        let mut list = Self::with_counter(self.counter.clone());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a SeqList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, S, K: Key>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.storage.get(self.front).expect("linked key is occupied");
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> DoubleEndedIterator for Iter<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.storage.get(self.back).expect("linked key is occupied");
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}
