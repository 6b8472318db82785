// ============================================================================
// Operation
// Names the four arithmetic functions and dispatches to them
// ============================================================================

use crate::numeric::{
    addition, division, multiplication, subtraction, CheckedArithmetic, MathFunction,
    NumericError, NumericResult,
};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four elementary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// The `f64` binding implementing this operation.
    #[inline]
    pub fn function(self) -> MathFunction {
        match self {
            Operation::Addition => addition,
            Operation::Subtraction => subtraction,
            Operation::Multiplication => multiplication,
            Operation::Division => division,
        }
    }

    /// Apply with IEEE-754 semantics. Never fails.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        (self.function())(lhs, rhs)
    }

    /// Apply with checked semantics for any [`CheckedArithmetic`] type.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor, `Overflow`/`Underflow` when the
    /// result leaves the type's range, `InvalidInput` for NaN floats.
    #[inline]
    pub fn apply_checked<T: CheckedArithmetic>(self, lhs: T, rhs: T) -> NumericResult<T> {
        match self {
            Operation::Addition => lhs.checked_addition(rhs),
            Operation::Subtraction => lhs.checked_subtraction(rhs),
            Operation::Multiplication => lhs.checked_multiplication(rhs),
            Operation::Division => lhs.checked_division(rhs),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
        }
    }

    /// `op(a, b) == op(b, a)` for all operands.
    pub const fn is_commutative(self) -> bool {
        matches!(self, Operation::Addition | Operation::Multiplication)
    }

    /// `op(op(a, b), c) == op(a, op(b, c))`, exact for integers and up to
    /// rounding for floats.
    pub const fn is_associative(self) -> bool {
        matches!(self, Operation::Addition | Operation::Multiplication)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = NumericError;

    /// Parse an operation name (any case) or its symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                s.eq_ignore_ascii_case(op.name()) || (s.len() == 1 && s.starts_with(op.symbol()))
            })
            .ok_or(NumericError::InvalidInput)
    }
}
