use thiserror::Error;

/// Error type for the crate's fallible surface
///
/// The provider's own operations are total: the counter wraps instead of
/// overflowing and the hash accepts any byte sequence, including empty.
/// Errors only arise when reconstructing values from caller-persisted bytes
/// of the wrong width.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// Persisted subject bytes did not have the expected width
    #[error("invalid subject length: expected {expected} bytes, got {actual}")]
    InvalidSubjectLength { expected: usize, actual: usize },

    /// Persisted output bytes did not have the expected width
    #[error("invalid output length: expected {expected} bytes, got {actual}")]
    InvalidOutputLength { expected: usize, actual: usize },
}
