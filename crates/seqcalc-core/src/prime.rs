//! Prime sequence generator using trial division.

use num_bigint::BigUint;
use num_integer::Roots;

use crate::generator::SequenceGenerator;
use crate::kind::SequenceKind;

/// Collects primes by scanning candidates upward from 2.
pub struct PrimeGenerator;

impl PrimeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Trial division by every integer in `[2, floor(sqrt(candidate))]`.
    #[must_use]
    pub fn is_prime(candidate: u64) -> bool {
        if candidate < 2 {
            return false;
        }
        (2..=candidate.sqrt()).all(|divisor| candidate % divisor != 0)
    }
}

impl Default for PrimeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for PrimeGenerator {
    fn generate(&self, length: usize) -> Vec<BigUint> {
        let mut terms = Vec::with_capacity(length);
        let mut candidate: u64 = 2;

        while terms.len() < length {
            if Self::is_prime(candidate) {
                terms.push(BigUint::from(candidate));
            }
            candidate += 1;
        }

        tracing::debug!(length, last_candidate = candidate - 1, "prime scan finished");
        terms
    }

    fn kind(&self) -> SequenceKind {
        SequenceKind::Prime
    }

    fn name(&self) -> &'static str {
        "PrimeGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_first_five() {
        let expected: Vec<BigUint> = [2u32, 3, 5, 7, 11].into_iter().map(BigUint::from).collect();
        assert_eq!(PrimeGenerator::new().generate(5), expected);
    }

    #[test]
    fn generate_empty() {
        assert!(PrimeGenerator::new().generate(0).is_empty());
    }

    #[test]
    fn hundredth_prime() {
        let primes = PrimeGenerator::new().generate(100);
        assert_eq!(primes[99], BigUint::from(541u32));
    }

    #[test]
    fn is_prime_small_values() {
        assert!(!PrimeGenerator::is_prime(0));
        assert!(!PrimeGenerator::is_prime(1));
        assert!(PrimeGenerator::is_prime(2));
        assert!(PrimeGenerator::is_prime(3));
        assert!(!PrimeGenerator::is_prime(4));
    }

    #[test]
    fn is_prime_perfect_squares_of_primes() {
        // The sqrt bound must be inclusive.
        assert!(!PrimeGenerator::is_prime(9));
        assert!(!PrimeGenerator::is_prime(25));
        assert!(!PrimeGenerator::is_prime(49));
        assert!(!PrimeGenerator::is_prime(10_201)); // 101^2
    }

    #[test]
    fn generator_name() {
        assert_eq!(PrimeGenerator::new().name(), "PrimeGenerator");
    }
}
