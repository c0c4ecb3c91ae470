//! Built-in calculation variants.
//!
//! Each variant wraps a [`CalculationBase`](crate::CalculationBase) and reduces
//! its inputs with a left fold, using the first input as the seed.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;

pub use addition::Addition;
pub use division::Division;
pub use multiplication::Multiplication;
pub use subtraction::Subtraction;
