//! Typed errors for fallible container operations.
//!
//! Every operation that can fail has a `try_` form returning [`VecError`].
//! The plain forms route the same value to [`crate::precondition::fatal`],
//! so both paths report identical diagnostics.
//!
//! Expected absence (an empty cursor, a missing element) is never an error:
//! it is `None`.

use core::alloc::Layout;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecError {
    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow: {requested} elements do not fit in the address space")]
    CapacityOverflow { requested: usize },

    /// Appending `additional` elements to `len` would overflow `usize`.
    #[error("{op}: len {len} plus {additional} more elements overflows usize")]
    LengthOverflow {
        op: &'static str,
        len: usize,
        additional: usize,
    },

    /// The allocator returned an error.
    #[error("out of memory: allocation of {} bytes (align {}) failed", .layout.size(), .layout.align())]
    AllocFailed { layout: Layout },

    /// `index` is not a valid position for `op`.
    #[error("{op}: index (is {index}) should be < len (is {len})")]
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        len: usize,
    },

    /// `insert` accepts one-past-the-end, so its bound is inclusive.
    #[error("{op}: index (is {index}) should be <= len (is {len})")]
    InsertOutOfBounds {
        op: &'static str,
        index: usize,
        len: usize,
    },

    #[error("slice: range {start}..{end} is invalid for len {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("slice: buffer holds {available} elements but {needed} are required")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("{op}: called on an empty vector")]
    Empty { op: &'static str },
}

impl VecError {
    /// Name of the operation that produced this error, when it has one.
    pub fn op(&self) -> Option<&'static str> {
        match self {
            VecError::IndexOutOfBounds { op, .. }
            | VecError::InsertOutOfBounds { op, .. }
            | VecError::LengthOverflow { op, .. }
            | VecError::Empty { op } => Some(op),
            VecError::InvalidRange { .. } | VecError::BufferTooSmall { .. } => Some("slice"),
            VecError::CapacityOverflow { .. } | VecError::AllocFailed { .. } => None,
        }
    }

    pub fn is_alloc_failure(&self) -> bool {
        matches!(self, VecError::AllocFailed { .. })
    }
}
