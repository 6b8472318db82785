// ============================================================================
// Numeric Errors
// Error types for checked arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during checked arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Result exceeded the maximum of the operand type
    Overflow,
    /// Result below the minimum of the operand type
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// NaN operand or unrecognized operation
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => {
                write!(f, "invalid input: operand or operation is not valid")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Underflow.to_string(),
            "arithmetic underflow: result below minimum value"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: operand or operation is not valid"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serde() {
        let json = serde_json::to_string(&NumericError::Overflow).unwrap();
        assert_eq!(json, "\"Overflow\"");
        let back: NumericError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NumericError::Overflow);
    }
}
