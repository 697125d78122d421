//! Storage trait for arena-like containers with stable keys.
//!
//! Storage provides insert/remove/get operations where keys remain valid
//! until explicitly removed. This lets [`SeqList`](crate::SeqList) link its
//! nodes with plain integer keys instead of pointers.

use crate::Key;

/// Arena-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// Insertion is infallible. Growing storage that cannot allocate aborts the
/// process, the same as any other Rust collection.
///
/// # Implementations
///
/// - [`Arena<T>`] - growable, `Vec` backed (in this crate)
/// - `slab::Slab<T>` - growable, heap allocated (feature `slab`)
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns mutable references to two distinct occupied slots.
    ///
    /// Returns `None` if `a == b` or either key is vacant.
    fn get_pair_mut(&mut self, a: Self::Key, b: Self::Key) -> Option<(&mut T, &mut T)>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Arena - growable, Vec backed, intrusive free list
// =============================================================================

#[derive(Debug, Clone)]
enum Slot<T, K> {
    Occupied(T),
    /// Vacant slot holding the key of the next vacant slot.
    Vacant(K),
}

/// Growable storage backed by a single `Vec`.
///
/// Vacant slots form a LIFO free list threaded through the slots themselves,
/// so the most recently freed slot is reused first.
///
/// # Example
///
/// ```
/// use nexus_seq::{Arena, Storage};
///
/// let mut arena: Arena<u64> = Arena::with_capacity(16);
///
/// let key = arena.insert(42);
/// assert_eq!(arena.get(key), Some(&42));
/// assert_eq!(arena.remove(key), Some(42));
/// assert!(arena.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    free_head: K,
    len: usize,
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before growing.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of values the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every value and forgets all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = K::NONE;
        self.len = 0;
    }
}

impl<T, K: Key> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Storage<T> for Arena<T, K> {
    type Key = K;

    #[inline]
    fn insert(&mut self, value: T) -> K {
        if self.free_head.is_some() {
            let key = self.free_head;
            let slot = &mut self.slots[key.as_usize()];
            match core::mem::replace(slot, Slot::Occupied(value)) {
                Slot::Vacant(next_free) => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            self.len += 1;
            return key;
        }

        assert!(
            self.slots.len() < K::NONE.as_usize(),
            "arena key space exhausted"
        );
        let key = K::from_usize(self.slots.len());
        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        key
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let slot = self.slots.get_mut(key.as_usize())?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }

        match core::mem::replace(slot, Slot::Vacant(self.free_head)) {
            Slot::Occupied(value) => {
                self.free_head = key;
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant(_) => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    fn get_pair_mut(&mut self, a: K, b: K) -> Option<(&mut T, &mut T)> {
        let (ia, ib) = (a.as_usize(), b.as_usize());
        if ia == ib || ia >= self.slots.len() || ib >= self.slots.len() {
            return None;
        }

        // Split so the two borrows are provably disjoint
        let (lo, hi) = self.slots.split_at_mut(ia.max(ib));
        let (first, second) = (&mut lo[ia.min(ib)], &mut hi[0]);

        match (first, second) {
            (Slot::Occupied(x), Slot::Occupied(y)) => {
                if ia < ib {
                    Some((x, y))
                } else {
                    Some((y, x))
                }
            }
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn get_pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        // slab panics on equal keys
        if a == b {
            return None;
        }
        self.get2_mut(a, b)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}
