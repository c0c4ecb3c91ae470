//! Request and response shapes for the calculation service.
//!
//! Deserialisation rejects structurally malformed payloads (non-numeric
//! inputs, unknown type tags, malformed user ids). [`CalculationCreate::validate`]
//! then checks the numeric conditions. The core re-checks everything when the
//! calculation is evaluated, so these checks are an early exit, not a guarantee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::CalculationType;
use crate::error::{CalcResult, CalculationError};
use crate::store::CalculationRecord;

/// Payload for creating a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationCreate {
    #[serde(rename = "type")]
    pub kind: CalculationType,
    pub inputs: Vec<f64>,
    pub user_id: Uuid,
}

impl CalculationCreate {
    pub fn new(kind: CalculationType, inputs: Vec<f64>, user_id: Uuid) -> Self {
        Self { kind, inputs, user_id }
    }

    pub fn validate(&self) -> CalcResult<()> {
        validate_inputs(self.kind, &self.inputs)
    }
}

/// Payload for replacing the inputs of a stored calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationUpdate {
    pub inputs: Vec<f64>,
}

/// A stored calculation as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRead {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CalculationType,
    pub inputs: Vec<f64>,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CalculationRecord> for CalculationRead {
    fn from(record: CalculationRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            kind: record.kind,
            inputs: record.inputs,
            result: record.result,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

pub(crate) fn validate_inputs(kind: CalculationType, inputs: &[f64]) -> CalcResult<()> {
    if inputs.len() < 2 {
        return Err(CalculationError::InsufficientInputs);
    }
    if kind == CalculationType::Division && inputs[1..].iter().any(|&x| x == 0.0) {
        return Err(CalculationError::DivisionByZero);
    }
    Ok(())
}
