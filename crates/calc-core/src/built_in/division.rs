//! Division
//!
//! The seed is divided by each remaining operand in order. A zero anywhere
//! after the seed rejects the whole calculation before any arithmetic runs.

use calc_types::InputValue;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{
    Calculation, CalculationBase, CalculationType, fold_operands, validated_operands,
};
use crate::error::{CalcResult, CalculationError};
use crate::operations;

#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    base: CalculationBase,
}

impl Division {
    pub fn new(user_id: Uuid, inputs: impl Into<InputValue>) -> Self {
        Self { base: CalculationBase::new(user_id, inputs) }
    }
}

impl From<CalculationBase> for Division {
    fn from(base: CalculationBase) -> Self {
        Self { base }
    }
}

impl Calculation for Division {
    fn kind(&self) -> Option<CalculationType> {
        Some(CalculationType::Division)
    }

    fn base(&self) -> &CalculationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CalculationBase {
        &mut self.base
    }

    fn get_result(&self) -> CalcResult<f64> {
        let operands = validated_operands(&self.base.inputs)?;
        if operands[1..].iter().any(|&x| x == 0.0) {
            debug!(user_id = %self.base.user_id, "division rejected: zero divisor");
            return Err(CalculationError::DivisionByZero);
        }
        fold_operands(&operands, operations::divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_left_to_right() {
        let calc = Division::new(Uuid::new_v4(), vec![100_i64, 5, 2]);
        assert_eq!(calc.get_result(), Ok(10.0));
    }

    #[test]
    fn integral_operands_use_true_division() {
        let calc = Division::new(Uuid::new_v4(), vec![7_i64, 2]);
        assert_eq!(calc.get_result(), Ok(3.5));
    }

    #[test]
    fn zero_divisor_is_rejected_at_evaluation() {
        let calc = Division::new(Uuid::new_v4(), vec![10_i64, 2, 0]);
        assert_eq!(calc.get_result(), Err(CalculationError::DivisionByZero));
    }

    #[test]
    fn zero_seed_is_allowed() {
        let calc = Division::new(Uuid::new_v4(), vec![0_i64, 5]);
        assert_eq!(calc.get_result(), Ok(0.0));
    }
}
