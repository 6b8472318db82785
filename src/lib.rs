// ============================================================================
// Arithmetic Kit Library
// Elementary arithmetic with IEEE-754 and checked evaluation
// ============================================================================

//! # Arithmetic Kit
//!
//! Four elementary arithmetic functions sharing one function shape, plus the
//! plumbing to evaluate them safely.
//!
//! ## Features
//!
//! - **`MathFunction` bindings**: `addition`, `subtraction`, `multiplication`,
//!   `division` over `f64`, with IEEE-754 division by zero
//! - **Checked arithmetic** for integers, floats and `rust_decimal::Decimal`
//!   returning `NumericError::DivisionByZero` instead of special values
//! - **Calculator** service with sequencing and event reporting
//!
//! ## Example
//!
//! ```rust
//! use arithmetic_kit::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(addition(2.0, 3.0), 5.0);
//! assert_eq!(division(1.0, 0.0), f64::INFINITY);
//!
//! // Same operation, checked integer semantics
//! assert_eq!(
//!     Operation::Division.apply_checked(1i64, 0),
//!     Err(NumericError::DivisionByZero)
//! );
//!
//! let calculator = CalculatorBuilder::new("demo")
//!     .checked()
//!     .build(Arc::new(LoggingEventHandler))
//!     .unwrap();
//!
//! assert_eq!(calculator.evaluate(Operation::Division, 10.0, 2.0), Ok(5.0));
//! assert!(calculator.evaluate(Operation::Division, 1.0, 0.0).is_err());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

pub use numeric::{addition, division, multiplication, subtraction, MathFunction};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ArithmeticMode, Calculation, CalculationId, CalculatorConfig, Operation,
    };
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        CalculationEvent, ChannelEventHandler, EventHandler, LoggingEventHandler,
        NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{
        addition, division, multiplication, subtraction, CheckedArithmetic, MathFunction,
        NumericError, NumericResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_evaluation() {
        let handler = Arc::new(RecordingEventHandler::new());
        let calculator = create_from_config(CalculatorConfig::checked("e2e"), handler.clone())
            .unwrap();

        for op in Operation::ALL {
            let expected = op.apply(12.0, 4.0);
            assert_eq!(calculator.evaluate(op, 12.0, 4.0), Ok(expected));
        }

        assert_eq!(
            calculator.evaluate(Operation::Division, 1.0, 0.0),
            Err(NumericError::DivisionByZero)
        );

        let events = handler.events();
        assert_eq!(events.len(), 5);
        assert!(events[..4].iter().all(|e| !e.is_rejected()));
        assert!(events[4].is_rejected());
    }

    #[test]
    fn test_root_bindings() {
        let f: crate::MathFunction = crate::multiplication;
        assert_eq!(f(4.0, 5.0), 20.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_event_serde() {
        let (handler, receiver) = ChannelEventHandler::unbounded();
        let calculator = Calculator::new(CalculatorConfig::checked("serde"), Arc::new(handler));

        calculator.evaluate(Operation::Division, 1.0, 0.0).unwrap_err();
        let event = receiver.try_recv().unwrap();

        let json = event.to_json().unwrap();
        assert!(json.contains("DivisionByZero"));

        let back: CalculationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_event_serde_keeps_ieee_specials() {
        let (handler, receiver) = ChannelEventHandler::unbounded();
        let calculator = Calculator::new(CalculatorConfig::ieee754("serde"), Arc::new(handler));

        assert_eq!(
            calculator.evaluate(Operation::Division, 1.0, 0.0),
            Ok(f64::INFINITY)
        );
        let event = receiver.try_recv().unwrap();

        let json = event.to_json().unwrap();
        assert!(json.contains(r#""result":"inf""#));

        let back: CalculationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);

        calculator.evaluate(Operation::Division, 0.0, 0.0).unwrap();
        let nan_event = receiver.try_recv().unwrap();
        let back: CalculationEvent = serde_json::from_str(&nan_event.to_json().unwrap()).unwrap();
        match back {
            CalculationEvent::Evaluated { calculation, .. } => assert!(calculation.result.is_nan()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rejected_event_serde_keeps_nan_operand() {
        let (handler, receiver) = ChannelEventHandler::unbounded();
        let calculator = Calculator::new(CalculatorConfig::checked("serde"), Arc::new(handler));

        assert_eq!(
            calculator.evaluate(Operation::Addition, f64::NAN, 1.0),
            Err(NumericError::InvalidInput)
        );
        let event = receiver.try_recv().unwrap();

        let back: CalculationEvent = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        match back {
            CalculationEvent::Rejected { lhs, rhs, error, .. } => {
                assert!(lhs.is_nan());
                assert_eq!(rhs, 1.0);
                assert_eq!(error, NumericError::InvalidInput);
            },
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
