//! # seqcalc-core
//!
//! Core library for SeqCalc. Generates the first terms of the Fibonacci,
//! prime, square, triangular and factorial sequences with arbitrary
//! precision.

pub mod constants;
pub mod factorial;
pub mod fibonacci;
pub mod figurate;
pub mod generator;
pub mod kind;
pub mod prime;
pub mod registry;

// Re-exports
pub use constants::exit_codes;
pub use generator::{validate_length, SequenceError, SequenceGenerator};
pub use kind::SequenceKind;
pub use registry::{DefaultFactory, GeneratorFactory};

use std::sync::{Arc, LazyLock};

use num_bigint::BigUint;

static FACTORY: LazyLock<DefaultFactory> = LazyLock::new(DefaultFactory::new);

/// Process-wide generator factory shared by every entry point.
#[must_use]
pub fn factory() -> &'static DefaultFactory {
    &FACTORY
}

/// Validate an untyped kind name and length, returning the generator and the
/// checked length.
///
/// The kind is checked first, then the length; both fail with
/// [`SequenceError::InvalidArgument`].
pub fn resolve(
    name: &str,
    length: i64,
) -> Result<(Arc<dyn SequenceGenerator>, usize), SequenceError> {
    let kind: SequenceKind = name.parse()?;
    let length = validate_length(length)?;
    Ok((factory().get(kind), length))
}

/// Generate the first `length` terms of `kind`.
///
/// # Example
/// ```
/// use seqcalc_core::{sequence, SequenceKind};
/// let squares: Vec<String> = sequence(SequenceKind::Square, 4)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(squares, ["1", "4", "9", "16"]);
/// ```
#[must_use]
pub fn sequence(kind: SequenceKind, length: usize) -> Vec<BigUint> {
    let terms = factory().get(kind).generate(length);
    tracing::debug!(%kind, length, "sequence generated");
    terms
}

/// Generate a sequence from an untyped kind name and length.
///
/// Fails with [`SequenceError::InvalidArgument`] when `name` is not a known
/// kind or `length` is negative. See [`resolve`].
pub fn generate(name: &str, length: i64) -> Result<Vec<BigUint>, SequenceError> {
    let (generator, length) = resolve(name, length)?;
    Ok(sequence(generator.kind(), length))
}
