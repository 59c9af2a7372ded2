use thiserror::Error;

/// Errors surfaced by cursors and adapters.
///
/// All of these are usage errors. None of them is transient, so callers
/// should never retry the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// `next()` was called after `has_next()` reported `false`.
    #[error("next() called on an exhausted iterator after {position} element(s)")]
    Exhausted { position: usize },

    /// A mutating operation was attempted through a read-only iterator.
    #[error("{operation}() is not supported by a read-only iterator")]
    UnsupportedMutation { operation: &'static str },

    /// Random access past the end of a primitive array.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
