//! Errors raised when an operation's precondition does not hold.
use thiserror::Error;

/// Precondition failures of pack algorithms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index (or rotation amount) lies outside the pack.
    #[error("{operation}: index {index} out of range for pack of length {len}")]
    IndexOutOfRange {
        /// Failing operation.
        operation: &'static str,
        /// Requested index.
        index: usize,
        /// Length of the pack.
        len: usize,
    },
    /// The operation needs at least one item.
    #[error("{operation}: pack is empty")]
    EmptyPack {
        /// Failing operation.
        operation: &'static str,
    },
    /// Two packs were expected to have the same length.
    #[error("{operation}: lengths differ ({left} vs {right})")]
    LengthMismatch {
        /// Failing operation.
        operation: &'static str,
        /// Length of the left pack.
        left: usize,
        /// Length of the right pack.
        right: usize,
    },
    /// `flatten` only accepts a pack holding exactly one inner pack.
    #[error("flatten: expected a single inner pack, found {len} items")]
    NotSingleton {
        /// Number of items found.
        len: usize,
    },
    /// No map entry carries the requested key.
    #[error("no entry with the requested key")]
    KeyNotFound,
}

/// Result type of fallible pack algorithms.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn out_of_range(operation: &'static str, index: usize, len: usize) -> Error {
    Error::IndexOutOfRange {
        operation,
        index,
        len,
    }
}
