//! Error handling for calculation construction, evaluation and storage
//!
//! Every failure produced by this crate is a typed, permanent rejection of the
//! given inputs. Nothing here is transient, so callers should never retry the
//! same request expecting a different outcome.

use thiserror::Error;
use uuid::Uuid;

/// Error type for calculation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// The requested operation tag is not one of the supported types
    #[error("Unsupported calculation type: {0}")]
    UnsupportedCalculationType(String),

    /// A non-seed operand of a division is zero
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    /// Inputs are not an ordered sequence of numbers
    #[error("Inputs must be a list of numbers.")]
    InvalidInputType,

    /// Fewer than two inputs were supplied
    #[error("Inputs must be a list with at least two numbers.")]
    InsufficientInputs,

    /// `get_result()` was invoked on the abstract calculation base
    #[error("Subclasses must implement get_result() method.")]
    NotImplemented,

    /// The request carries more operands than the service accepts
    #[error("Too many inputs: {count} exceeds the limit of {limit}")]
    TooManyInputs { count: usize, limit: usize },

    /// No stored calculation has the given id
    #[error("Calculation not found: {id}")]
    NotFound { id: Uuid },
}

impl CalculationError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalculationError::UnsupportedCalculationType(_) => "unsupported_type",
            CalculationError::DivisionByZero => "division_by_zero",
            CalculationError::InvalidInputType => "invalid_input_type",
            CalculationError::InsufficientInputs => "insufficient_inputs",
            CalculationError::NotImplemented => "not_implemented",
            CalculationError::TooManyInputs { .. } => "too_many_inputs",
            CalculationError::NotFound { .. } => "not_found",
        }
    }

    /// Whether the error rejects the supplied inputs (as opposed to a lookup miss
    /// or a programming error)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalculationError::UnsupportedCalculationType(_)
                | CalculationError::DivisionByZero
                | CalculationError::InvalidInputType
                | CalculationError::InsufficientInputs
                | CalculationError::TooManyInputs { .. }
        )
    }
}

/// Result type alias for calculation operations
pub type CalcResult<T> = Result<T, CalculationError>;
