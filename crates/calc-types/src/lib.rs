//! Calc Types
//!
//! This crate defines the dynamically typed input value used throughout the
//! calculation workspace (currently `calc-core` and `calc-cli`). Calculations
//! receive their operands as an `InputValue` so that malformed payloads can be
//! carried up to the point where they are validated and rejected.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]

mod types;
pub use types::InputValue;
