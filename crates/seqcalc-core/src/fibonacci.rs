//! Iterative Fibonacci sequence generator.

use num_bigint::BigUint;

use crate::generator::SequenceGenerator;
use crate::kind::SequenceKind;

/// Iterative generator that advances the `(a, b)` pair one step per term.
pub struct FibonacciGenerator;

impl FibonacciGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FibonacciGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for FibonacciGenerator {
    fn generate(&self, length: usize) -> Vec<BigUint> {
        let mut terms = Vec::with_capacity(length);
        let mut a = BigUint::from(0u32);
        let mut b = BigUint::from(1u32);

        for _ in 0..length {
            let next = &a + &b;
            let prev = std::mem::replace(&mut b, next);
            terms.push(std::mem::replace(&mut a, prev));
        }

        terms
    }

    fn kind(&self) -> SequenceKind {
        SequenceKind::Fibonacci
    }

    fn name(&self) -> &'static str {
        "FibonacciGenerator"
    }
}
