//! Generator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::factorial::FactorialGenerator;
use crate::fibonacci::FibonacciGenerator;
use crate::figurate::{SquareGenerator, TriangularGenerator};
use crate::generator::{SequenceError, SequenceGenerator};
use crate::kind::SequenceKind;
use crate::prime::PrimeGenerator;

/// Factory trait for looking up generators.
pub trait GeneratorFactory: Send + Sync {
    /// Get or create the generator for a kind.
    fn get(&self, kind: SequenceKind) -> Arc<dyn SequenceGenerator>;

    /// Get a generator by its lowercase kind name.
    fn get_by_name(&self, name: &str) -> Result<Arc<dyn SequenceGenerator>, SequenceError> {
        Ok(self.get(name.parse()?))
    }

    /// List all available kinds.
    fn available(&self) -> Vec<SequenceKind>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<SequenceKind, Arc<dyn SequenceGenerator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_generator(kind: SequenceKind) -> Arc<dyn SequenceGenerator> {
        match kind {
            SequenceKind::Fibonacci => Arc::new(FibonacciGenerator::new()),
            SequenceKind::Prime => Arc::new(PrimeGenerator::new()),
            SequenceKind::Square => Arc::new(SquareGenerator::new()),
            SequenceKind::Triangular => Arc::new(TriangularGenerator::new()),
            SequenceKind::Factorial => Arc::new(FactorialGenerator::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, kind: SequenceKind) -> Arc<dyn SequenceGenerator> {
        // Check cache first
        if let Some(gen) = self.cache.read().get(&kind) {
            return Arc::clone(gen);
        }

        let gen = Self::create_generator(kind);
        self.cache.write().insert(kind, Arc::clone(&gen));
        gen
    }

    fn available(&self) -> Vec<SequenceKind> {
        SequenceKind::ALL.to_vec()
    }
}
