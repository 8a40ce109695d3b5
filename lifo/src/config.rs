use crate::brackets::Brackets;
use crate::postfix::{Evaluator, Operators};

/// Configuration shared by everything a [`crate::Session`] or a host program evaluates.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub brackets: Brackets,
    pub operators: Operators,
}

impl Config {
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.operators.clone())
    }
}
