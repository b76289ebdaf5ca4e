//! Error outcomes shared by containers, cursors and algorithms.
//!
//! Queries never return an [`Error`]: they fall back to a safe sentinel
//! (`0`, `false`, `None` or an `end` cursor). Only operations that mutate,
//! or that must say *which* problem happened, return [`Result`].

use std::collections::TryReserveError;
use thiserror::Error;

/// Result alias used by every fallible operation of the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A position, or a cursor dereference, fell outside `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A parameter was recognized but cannot be honored, e.g. an unknown or
    /// reserved strategy tag.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A fixed-capacity container is full. Nothing was allocated, so its
    /// kind is [`ErrorKind::InvalidParameter`].
    #[error("capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },

    /// Growing the backing storage failed.
    #[error("memory allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),

    /// The cursor family or container does not provide this operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A bookmark was taken before a structural mutation of its container.
    #[error("stale cursor: taken at generation {expected}, container is at {found}")]
    StaleCursor { expected: u64, found: u64 },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IndexOutOfRange,
    InvalidParameter,
    MemoryAllocation,
    Unsupported,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::InvalidParameter(_) | Error::CapacityExceeded { .. } => {
                ErrorKind::InvalidParameter
            }
            Error::AllocationFailed(_) => ErrorKind::MemoryAllocation,
            Error::Unsupported(_) | Error::StaleCursor { .. } => ErrorKind::Unsupported,
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}
