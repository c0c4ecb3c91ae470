//! The calculation abstraction shared by every arithmetic variant.

use std::fmt;
use std::str::FromStr;

use calc_types::InputValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalcResult, CalculationError};

/// The four supported operation kinds.
///
/// Serialised lowercase; parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CalculationType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl CalculationType {
    pub const ALL: [CalculationType; 4] = [
        CalculationType::Addition,
        CalculationType::Subtraction,
        CalculationType::Multiplication,
        CalculationType::Division,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationType::Addition => "addition",
            CalculationType::Subtraction => "subtraction",
            CalculationType::Multiplication => "multiplication",
            CalculationType::Division => "division",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationType {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        CalculationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CalculationError::UnsupportedCalculationType(s.to_string()))
    }
}

impl TryFrom<String> for CalculationType {
    type Error = CalculationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalculationType> for String {
    fn from(kind: CalculationType) -> Self {
        kind.as_str().to_string()
    }
}

/// State shared by every calculation: the owning user and the raw inputs.
///
/// The base is also usable on its own, but it has no operator, so asking it
/// for a result fails with [`CalculationError::NotImplemented`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationBase {
    pub user_id: Uuid,
    pub inputs: InputValue,
}

impl CalculationBase {
    pub fn new(user_id: Uuid, inputs: impl Into<InputValue>) -> Self {
        Self { user_id, inputs: inputs.into() }
    }
}

/// A trait for all calculations.
///
/// Implementations validate their inputs on every call to [`get_result`] and
/// never cache the result.
///
/// [`get_result`]: Calculation::get_result
pub trait Calculation: fmt::Debug + Send + Sync {
    /// The operation kind, or `None` for the abstract base.
    fn kind(&self) -> Option<CalculationType>;

    fn base(&self) -> &CalculationBase;

    fn base_mut(&mut self) -> &mut CalculationBase;

    /// Validates the stored inputs and reduces them to a single value.
    fn get_result(&self) -> CalcResult<f64>;

    fn user_id(&self) -> Uuid {
        self.base().user_id
    }

    fn inputs(&self) -> &InputValue {
        &self.base().inputs
    }

    /// Replaces the stored inputs. No validation happens until the next
    /// [`get_result`](Calculation::get_result).
    fn set_inputs(&mut self, inputs: InputValue) {
        self.base_mut().inputs = inputs;
    }
}

impl Calculation for CalculationBase {
    fn kind(&self) -> Option<CalculationType> {
        None
    }

    fn base(&self) -> &CalculationBase {
        self
    }

    fn base_mut(&mut self) -> &mut CalculationBase {
        self
    }

    fn get_result(&self) -> CalcResult<f64> {
        Err(CalculationError::NotImplemented)
    }
}

/// Checks that `inputs` is a sequence of at least two numbers and returns them
/// as `f64`s. The type check runs before the length check.
pub(crate) fn validated_operands(inputs: &InputValue) -> CalcResult<Vec<f64>> {
    let operands = inputs.to_f64_vec().ok_or(CalculationError::InvalidInputType)?;
    if operands.len() < 2 {
        return Err(CalculationError::InsufficientInputs);
    }
    Ok(operands)
}

/// Left fold with the first operand as the seed.
pub(crate) fn fold_operands(
    operands: &[f64],
    op: impl Fn(f64, f64) -> CalcResult<f64>,
) -> CalcResult<f64> {
    let (seed, rest) = operands.split_first().ok_or(CalculationError::InsufficientInputs)?;
    rest.iter().try_fold(*seed, |acc, &operand| op(acc, operand))
}
