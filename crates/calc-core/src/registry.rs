use std::collections::HashMap;

use crate::built_in::{Addition, Division, Multiplication, Subtraction};
use crate::calculation::{Calculation, CalculationBase, CalculationType};

/// Builds a concrete calculation around an unvalidated base.
pub type Constructor = fn(CalculationBase) -> Box<dyn Calculation>;

/// Maps lowercase type tags to variant constructors.
pub struct CalculationRegistry {
    constructors: HashMap<&'static str, Constructor>,
}

impl Default for CalculationRegistry {
    fn default() -> Self {
        Self::with_built_ins()
    }
}

impl CalculationRegistry {
    pub fn empty() -> Self {
        Self { constructors: HashMap::new() }
    }

    pub fn with_built_ins() -> Self {
        let mut registry = Self::empty();
        registry.register(CalculationType::Addition, |base| Box::new(Addition::from(base)));
        registry.register(CalculationType::Subtraction, |base| Box::new(Subtraction::from(base)));
        registry
            .register(CalculationType::Multiplication, |base| Box::new(Multiplication::from(base)));
        registry.register(CalculationType::Division, |base| Box::new(Division::from(base)));
        registry
    }

    pub fn register(&mut self, kind: CalculationType, constructor: Constructor) {
        self.constructors.insert(kind.as_str(), constructor);
    }

    /// Looks up a tag that has already been lowercased.
    pub fn get(&self, normalized_tag: &str) -> Option<Constructor> {
        self.constructors.get(normalized_tag).copied()
    }

    /// Registered tags in alphabetical order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}
