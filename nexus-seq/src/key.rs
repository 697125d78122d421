//! Key trait for node links.
//!
//! Nodes refer to their neighbours by storage key rather than by pointer.
//! A reserved sentinel (`NONE`) marks the missing link at either end of the
//! chain, so a node only pays for two plain integers.

/// Trait for key types used to link nodes inside storage.
///
/// Provides a sentinel value (`NONE`) and conversion to/from `usize`.
///
/// # Example
///
/// ```
/// use nexus_seq::Key;
///
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7).as_usize(), 7);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no link".
    ///
    /// For integer types this is `MAX`, which storage never hands out.
    const NONE: Self;

    /// Creates a key from a slot position.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot position this key addresses.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(val < <$ty>::MAX as usize, "key space exhausted");
                    val as $ty
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);
