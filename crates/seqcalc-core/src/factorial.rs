//! Factorial sequence generator.

use num_bigint::BigUint;
use num_traits::One;

use crate::generator::SequenceGenerator;
use crate::kind::SequenceKind;

/// Each term is the previous one multiplied by its 1-based index.
pub struct FactorialGenerator;

impl FactorialGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FactorialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for FactorialGenerator {
    fn generate(&self, length: usize) -> Vec<BigUint> {
        let mut terms: Vec<BigUint> = Vec::with_capacity(length);

        for i in 1..=length {
            let term = match terms.last() {
                Some(prev) => prev * i,
                None => BigUint::one(),
            };
            terms.push(term);
        }

        terms
    }

    fn kind(&self) -> SequenceKind {
        SequenceKind::Factorial
    }

    fn name(&self) -> &'static str {
        "FactorialGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_first_six() {
        let expected: Vec<BigUint> = [1u32, 2, 6, 24, 120, 720]
            .into_iter()
            .map(BigUint::from)
            .collect();
        assert_eq!(FactorialGenerator::new().generate(6), expected);
    }

    #[test]
    fn generate_empty() {
        assert!(FactorialGenerator::new().generate(0).is_empty());
    }

    #[test]
    fn twenty_five_factorial_is_exact() {
        // 21! already exceeds u64::MAX.
        let terms = FactorialGenerator::new().generate(25);
        assert_eq!(
            terms[24].to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn generator_name() {
        assert_eq!(FactorialGenerator::new().name(), "FactorialGenerator");
    }
}
