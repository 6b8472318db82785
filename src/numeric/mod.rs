// ============================================================================
// Numeric Module
// Elementary arithmetic functions and checked evaluation
// ============================================================================
//
// This module provides:
// - MathFunction: the shared two-argument function shape
// - addition/subtraction/multiplication/division: IEEE-754 f64 bindings
// - CheckedArithmetic: Result-returning arithmetic for integers, floats
//   and rust_decimal::Decimal
// - NumericError: Error types for checked operations
// - serde_float: JSON-safe codec for f64 values (serde feature)
//
// Division by zero:
// - The f64 bindings follow IEEE-754 (1/0 = inf, 0/0 = NaN), never panic
// - CheckedArithmetic reports NumericError::DivisionByZero instead

mod checked;
mod errors;
mod functions;

#[cfg(feature = "serde")]
pub mod serde_float;

pub use checked::CheckedArithmetic;
pub use errors::{NumericError, NumericResult};
pub use functions::{addition, division, multiplication, subtraction, MathFunction};
