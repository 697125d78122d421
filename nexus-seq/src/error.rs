// nexus-seq/src/error.rs

//! Error types for indexed access.

use core::fmt;

/// Index outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// Length of the list at the time of the request.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl std::error::Error for OutOfBounds {}
