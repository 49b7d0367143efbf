//! Sequence generator trait and error type.

use num_bigint::BigUint;

use crate::kind::SequenceKind;

/// Error type for sequence generation.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Unknown sequence kind or negative length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the rendered sequence failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SequenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Trait for generators producing the first `length` terms of a sequence.
pub trait SequenceGenerator: Send + Sync {
    /// Generate exactly `length` terms, in order.
    fn generate(&self, length: usize) -> Vec<BigUint>;

    /// The kind this generator produces.
    fn kind(&self) -> SequenceKind;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Convert an untyped length into a `usize`, rejecting negatives.
pub fn validate_length(length: i64) -> Result<usize, SequenceError> {
    usize::try_from(length).map_err(|_| {
        SequenceError::InvalidArgument(format!("length must be non-negative, got {length}"))
    })
}
