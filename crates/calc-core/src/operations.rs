//! Binary arithmetic primitives
//!
//! The calculation variants reduce their inputs by folding one of these over
//! the operand sequence. All four follow IEEE-754 double semantics: infinities
//! and NaN propagate, and there is no overflow guard.

use crate::error::{CalcResult, CalculationError};

/// `a + b`
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b`
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// True division `a / b`. Fails when `b` is zero (of either sign).
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalculationError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_handles_integers_and_floats() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-2.0, -3.0), -5.0);
        assert_eq!(add(2.5, 3.5), 6.0);
        assert_eq!(add(-2.5, 3.5), 1.0);
        assert_eq!(add(0.0, 0.0), 0.0);
    }

    #[test]
    fn subtract_handles_integers_and_floats() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(-5.0, -3.0), -2.0);
        assert_eq!(subtract(5.5, 2.5), 3.0);
        assert_eq!(subtract(-5.5, -2.5), -3.0);
        assert_eq!(subtract(0.0, 0.0), 0.0);
    }

    #[test]
    fn multiply_handles_integers_and_floats() {
        assert_eq!(multiply(2.0, 3.0), 6.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert_eq!(multiply(2.5, 4.0), 10.0);
        assert_eq!(multiply(-2.5, 4.0), -10.0);
        assert_eq!(multiply(0.0, 5.0), 0.0);
    }

    #[test]
    fn divide_is_true_division() {
        assert_eq!(divide(6.0, 3.0), Ok(2.0));
        assert_eq!(divide(-6.0, 3.0), Ok(-2.0));
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
        assert_eq!(divide(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        assert_eq!(divide(6.0, 0.0), Err(CalculationError::DivisionByZero));
        assert_eq!(divide(6.0, -0.0), Err(CalculationError::DivisionByZero));
    }

    #[test]
    fn divide_by_zero_shares_the_calculation_message() {
        let err = divide(1.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Cannot divide by zero.");
    }

    #[test]
    fn non_finite_values_propagate() {
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(subtract(f64::NEG_INFINITY, 1.0), f64::NEG_INFINITY);
        assert!(multiply(f64::NAN, 1.0).is_nan());
        assert!(divide(f64::NAN, 1.0).unwrap().is_nan());
    }
}
