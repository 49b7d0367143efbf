//! Square and triangular number generators.

use num_bigint::BigUint;

use crate::generator::SequenceGenerator;
use crate::kind::SequenceKind;

/// Closed form: term `i` (1-indexed) is `i * i`.
pub struct SquareGenerator;

impl SquareGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SquareGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for SquareGenerator {
    fn generate(&self, length: usize) -> Vec<BigUint> {
        (1..=length)
            .map(|i| {
                let i = BigUint::from(i);
                &i * &i
            })
            .collect()
    }

    fn kind(&self) -> SequenceKind {
        SequenceKind::Square
    }

    fn name(&self) -> &'static str {
        "SquareGenerator"
    }
}

/// Running sum: term `i` is `1 + 2 + ... + i`.
pub struct TriangularGenerator;

impl TriangularGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TriangularGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for TriangularGenerator {
    fn generate(&self, length: usize) -> Vec<BigUint> {
        let mut terms = Vec::with_capacity(length);
        let mut sum = BigUint::from(0u32);

        for i in 1..=length {
            sum += i;
            terms.push(sum.clone());
        }

        terms
    }

    fn kind(&self) -> SequenceKind {
        SequenceKind::Triangular
    }

    fn name(&self) -> &'static str {
        "TriangularGenerator"
    }
}
