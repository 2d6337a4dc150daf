//! Errors shared by the contiguous collections.

use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the logical range `0..len` of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl error::Error for IndexOutOfBounds {}

/// The requested capacity can't be represented, either because the capacity arithmetic overflowed
/// or because the memory layout would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl fmt::Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl error::Error for CapacityOverflow {}

/// The global allocator couldn't provide a block with the given layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Out of memory allocating {size} bytes (align {align})!")]
pub struct OutOfMemory {
    /// The size of the requested block, in bytes.
    pub size: usize,
    /// The alignment of the requested block, in bytes.
    pub align: usize,
}

/// Any failure to produce storage. Whenever an operation returns this error, the collection it was
/// invoked on is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`OutOfMemory`].
    OutOfMemory(OutOfMemory),
}
