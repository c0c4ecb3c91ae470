#![deny(warnings)]
//! Typed arithmetic calculations for the calculation service.
//!
//! This crate provides the [`Calculation`] trait with its four built-in
//! variants, the [`CalculationFactory`] that builds them from a type tag and
//! raw inputs, and the schema, store and service layers that persist finished
//! calculations against a user id.
//!
//! Validation happens in two phases. The factory rejects unknown type tags
//! and zero divisors up front; every call to [`Calculation::get_result`] then
//! re-checks that the inputs are a sequence of at least two numbers.

pub mod built_in;
pub mod calculation;
pub mod error;
pub mod factory;
pub mod operations;
pub mod registry;
pub mod schema;
pub mod service;
pub mod store;

pub use calc_types::InputValue;
pub use calculation::{Calculation, CalculationBase, CalculationType};
pub use error::{CalcResult, CalculationError};
pub use factory::CalculationFactory;
pub use schema::{CalculationCreate, CalculationRead, CalculationUpdate};
pub use service::{CalculationService, ServiceLimits};
pub use store::{CalculationRecord, CalculationStore, InMemoryCalculationStore};
