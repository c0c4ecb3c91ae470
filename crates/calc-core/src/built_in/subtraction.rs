//! Subtraction
//!
//! Each remaining operand is subtracted from the seed in order.

use calc_types::InputValue;
use uuid::Uuid;

use crate::calculation::{
    Calculation, CalculationBase, CalculationType, fold_operands, validated_operands,
};
use crate::error::CalcResult;
use crate::operations;

#[derive(Debug, Clone, PartialEq)]
pub struct Subtraction {
    base: CalculationBase,
}

impl Subtraction {
    pub fn new(user_id: Uuid, inputs: impl Into<InputValue>) -> Self {
        Self { base: CalculationBase::new(user_id, inputs) }
    }
}

impl From<CalculationBase> for Subtraction {
    fn from(base: CalculationBase) -> Self {
        Self { base }
    }
}

impl Calculation for Subtraction {
    fn kind(&self) -> Option<CalculationType> {
        Some(CalculationType::Subtraction)
    }

    fn base(&self) -> &CalculationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CalculationBase {
        &mut self.base
    }

    fn get_result(&self) -> CalcResult<f64> {
        let operands = validated_operands(&self.base.inputs)?;
        fold_operands(&operands, |a, b| Ok(operations::subtract(a, b)))
    }
}
