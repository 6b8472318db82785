//! Property tests for the arithmetic bindings and checked evaluation.

use arithmetic_kit::prelude::*;
use proptest::prelude::*;
use proptest::sample::select;
use rust_decimal::Decimal;
use std::sync::Arc;

fn operand() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6f64
}

fn operation() -> impl Strategy<Value = Operation> {
    select(Operation::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_addition_commutativity(a in operand(), b in operand()) {
        prop_assert_eq!(addition(a, b), addition(b, a));
    }

    #[test]
    fn test_subtraction_antisymmetry(a in operand(), b in operand()) {
        prop_assert_eq!(subtraction(a, b), -subtraction(b, a));
    }

    #[test]
    fn test_multiplication_commutativity(a in operand(), b in operand()) {
        prop_assert_eq!(multiplication(a, b), multiplication(b, a));
    }

    #[test]
    fn test_division_inverts_multiplication(a in operand(), b in operand()) {
        prop_assume!(b.abs() > 1.0e-3);
        let roundtrip = division(multiplication(a, b), b);
        let tolerance = 1.0e-12 * a.abs().max(f64::MIN_POSITIVE);
        prop_assert!((roundtrip - a).abs() <= tolerance, "{} != {}", roundtrip, a);
    }

    #[test]
    fn test_checked_integer_division_by_zero(a in any::<i64>()) {
        prop_assert_eq!(
            Operation::Division.apply_checked(a, 0),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_i32_matches_wide_arithmetic(
        op in operation(),
        a in any::<i32>(),
        b in any::<i32>()
    ) {
        prop_assume!(!(op == Operation::Division && b == 0));

        let wide = op.apply_checked(a as i64, b as i64).unwrap();
        let narrow = op.apply_checked(a, b);

        let expected = if wide > i32::MAX as i64 {
            Err(NumericError::Overflow)
        } else if wide < i32::MIN as i64 {
            Err(NumericError::Underflow)
        } else {
            Ok(wide as i32)
        };
        prop_assert_eq!(narrow, expected);
    }

    #[test]
    fn test_checked_decimal_add_then_subtract(
        a in any::<i64>(),
        b in any::<i64>(),
        scale in 0u32..10
    ) {
        let a = Decimal::new(a, scale);
        let b = Decimal::new(b, 0);
        let sum = a.checked_addition(b).unwrap();
        prop_assert_eq!(sum.checked_subtraction(b), Ok(a));
    }

    #[test]
    fn test_ieee_calculator_matches_operation(
        op in operation(),
        a in operand(),
        b in operand()
    ) {
        let calculator = Calculator::default();
        let result = calculator.evaluate(op, a, b).unwrap();
        prop_assert_eq!(result.to_bits(), op.apply(a, b).to_bits());
    }

    #[test]
    fn test_checked_calculator_agrees_on_finite_results(
        op in operation(),
        a in operand(),
        b in operand()
    ) {
        prop_assume!(b != 0.0);
        let calculator = Calculator::new(
            CalculatorConfig::checked("props"),
            Arc::new(NoOpEventHandler),
        );
        prop_assert_eq!(calculator.evaluate(op, a, b), Ok(op.apply(a, b)));
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(addition(2.0, 3.0), 5.0);
    assert_eq!(subtraction(5.0, 2.0), 3.0);
    assert_eq!(multiplication(4.0, 5.0), 20.0);
    assert_eq!(division(10.0, 2.0), 5.0);
    assert_eq!(division(1.0, 0.0), f64::INFINITY);
}
