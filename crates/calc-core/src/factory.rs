//! Calculation factory
//!
//! Maps a type tag and raw inputs to a constructed calculation. Only the
//! divide-by-zero condition is checked here; structural validation of the
//! inputs is left to [`Calculation::get_result`] so that it runs on every
//! evaluation.

use calc_types::InputValue;
use once_cell::sync::Lazy;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{Calculation, CalculationBase, CalculationType};
use crate::error::{CalcResult, CalculationError};
use crate::registry::CalculationRegistry;

static REGISTRY: Lazy<CalculationRegistry> = Lazy::new(CalculationRegistry::with_built_ins);

pub struct CalculationFactory;

impl CalculationFactory {
    /// Creates the calculation variant named by `calculation_type`.
    ///
    /// # Errors
    ///
    /// * [`CalculationError::UnsupportedCalculationType`] if the tag is unknown
    ///   (case-insensitive match); the message carries the tag as given.
    /// * [`CalculationError::DivisionByZero`] for a division whose inputs hold a
    ///   zero after the first position.
    pub fn create(
        calculation_type: &str,
        user_id: Uuid,
        inputs: impl Into<InputValue>,
    ) -> CalcResult<Box<dyn Calculation>> {
        let normalized = calculation_type.to_lowercase();
        let constructor = REGISTRY.get(&normalized).ok_or_else(|| {
            CalculationError::UnsupportedCalculationType(calculation_type.to_string())
        })?;

        let inputs = inputs.into();
        if normalized == CalculationType::Division.as_str() && has_zero_divisor(&inputs) {
            debug!(%user_id, "division rejected at creation: zero divisor");
            return Err(CalculationError::DivisionByZero);
        }

        debug!(%user_id, calculation_type = %normalized, "calculation created");
        Ok(constructor(CalculationBase::new(user_id, inputs)))
    }

    /// Supported type tags in alphabetical order.
    pub fn supported_types() -> Vec<&'static str> {
        REGISTRY.tags()
    }
}

// Inputs that are not a sequence have no divisors; `get_result` rejects them later.
fn has_zero_divisor(inputs: &InputValue) -> bool {
    inputs.as_array().is_some_and(|items| items.iter().skip(1).any(InputValue::is_zero))
}
