//! Addition
//!
//! Each remaining operand is added to the running total in order.

use calc_types::InputValue;
use uuid::Uuid;

use crate::calculation::{
    Calculation, CalculationBase, CalculationType, fold_operands, validated_operands,
};
use crate::error::CalcResult;
use crate::operations;

#[derive(Debug, Clone, PartialEq)]
pub struct Addition {
    base: CalculationBase,
}

impl Addition {
    pub fn new(user_id: Uuid, inputs: impl Into<InputValue>) -> Self {
        Self { base: CalculationBase::new(user_id, inputs) }
    }
}

impl From<CalculationBase> for Addition {
    fn from(base: CalculationBase) -> Self {
        Self { base }
    }
}

impl Calculation for Addition {
    fn kind(&self) -> Option<CalculationType> {
        Some(CalculationType::Addition)
    }

    fn base(&self) -> &CalculationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CalculationBase {
        &mut self.base
    }

    fn get_result(&self) -> CalcResult<f64> {
        let operands = validated_operands(&self.base.inputs)?;
        fold_operands(&operands, |a, b| Ok(operations::add(a, b)))
    }
}
