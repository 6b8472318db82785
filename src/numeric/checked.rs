// ============================================================================
// Checked Arithmetic
// Result-returning arithmetic for integers, floats and decimals
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Arithmetic that reports failure instead of wrapping, panicking or
/// producing IEEE special values.
///
/// Every method returns `DivisionByZero` for a zero divisor. Out-of-range
/// results are classified by the sign of the exact result: `Overflow` above
/// the type's maximum, `Underflow` below its minimum.
///
/// # Example
/// ```
/// use arithmetic_kit::numeric::{CheckedArithmetic, NumericError};
///
/// assert_eq!(10i64.checked_division(2), Ok(5));
/// assert_eq!(1i64.checked_division(0), Err(NumericError::DivisionByZero));
/// assert_eq!(i64::MAX.checked_addition(1), Err(NumericError::Overflow));
/// ```
pub trait CheckedArithmetic: Copy {
    /// Checked `self + rhs`.
    fn checked_addition(self, rhs: Self) -> NumericResult<Self>;

    /// Checked `self - rhs`.
    fn checked_subtraction(self, rhs: Self) -> NumericResult<Self>;

    /// Checked `self * rhs`.
    fn checked_multiplication(self, rhs: Self) -> NumericResult<Self>;

    /// Checked `self / rhs`.
    ///
    /// Integer division truncates toward zero.
    fn checked_division(self, rhs: Self) -> NumericResult<Self>;
}

/// Pick `Overflow` or `Underflow` from the sign of the exact result.
#[inline]
fn out_of_range(negative: bool) -> NumericError {
    if negative {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    }
}

// ============================================================================
// Integers
// ============================================================================

macro_rules! impl_checked_signed {
    ($($t:ty),* $(,)?) => {$(
        impl CheckedArithmetic for $t {
            #[inline]
            fn checked_addition(self, rhs: Self) -> NumericResult<Self> {
                self.checked_add(rhs).ok_or_else(|| out_of_range(rhs < 0))
            }

            #[inline]
            fn checked_subtraction(self, rhs: Self) -> NumericResult<Self> {
                self.checked_sub(rhs).ok_or_else(|| out_of_range(rhs > 0))
            }

            #[inline]
            fn checked_multiplication(self, rhs: Self) -> NumericResult<Self> {
                self.checked_mul(rhs)
                    .ok_or_else(|| out_of_range((self < 0) != (rhs < 0)))
            }

            #[inline]
            fn checked_division(self, rhs: Self) -> NumericResult<Self> {
                if rhs == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                // Only MIN / -1 can fail here
                self.checked_div(rhs).ok_or(NumericError::Overflow)
            }
        }
    )*};
}

macro_rules! impl_checked_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl CheckedArithmetic for $t {
            #[inline]
            fn checked_addition(self, rhs: Self) -> NumericResult<Self> {
                self.checked_add(rhs).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn checked_subtraction(self, rhs: Self) -> NumericResult<Self> {
                self.checked_sub(rhs).ok_or(NumericError::Underflow)
            }

            #[inline]
            fn checked_multiplication(self, rhs: Self) -> NumericResult<Self> {
                self.checked_mul(rhs).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn checked_division(self, rhs: Self) -> NumericResult<Self> {
                self.checked_div(rhs).ok_or(NumericError::DivisionByZero)
            }
        }
    )*};
}

impl_checked_signed!(i8, i16, i32, i64, i128, isize);
impl_checked_unsigned!(u8, u16, u32, u64, u128, usize);

// ============================================================================
// Floats
// ============================================================================

/// Validate an IEEE result computed from `lhs` and `rhs`.
///
/// NaN anywhere is `InvalidInput`. An infinite result is only an error when
/// both operands were finite.
macro_rules! finite_or_error {
    ($lhs:expr, $rhs:expr, $result:expr) => {{
        let (lhs, rhs, result) = ($lhs, $rhs, $result);
        if lhs.is_nan() || rhs.is_nan() || result.is_nan() {
            Err(NumericError::InvalidInput)
        } else if result.is_infinite() && lhs.is_finite() && rhs.is_finite() {
            Err(out_of_range(result.is_sign_negative()))
        } else {
            Ok(result)
        }
    }};
}

macro_rules! impl_checked_float {
    ($($t:ty),* $(,)?) => {$(
        impl CheckedArithmetic for $t {
            #[inline]
            fn checked_addition(self, rhs: Self) -> NumericResult<Self> {
                finite_or_error!(self, rhs, self + rhs)
            }

            #[inline]
            fn checked_subtraction(self, rhs: Self) -> NumericResult<Self> {
                finite_or_error!(self, rhs, self - rhs)
            }

            #[inline]
            fn checked_multiplication(self, rhs: Self) -> NumericResult<Self> {
                finite_or_error!(self, rhs, self * rhs)
            }

            #[inline]
            fn checked_division(self, rhs: Self) -> NumericResult<Self> {
                if self.is_nan() || rhs.is_nan() {
                    return Err(NumericError::InvalidInput);
                }
                // Matches both +0.0 and -0.0
                if rhs == 0.0 {
                    return Err(NumericError::DivisionByZero);
                }
                finite_or_error!(self, rhs, self / rhs)
            }
        }
    )*};
}

impl_checked_float!(f32, f64);

// ============================================================================
// Decimal
// ============================================================================

impl CheckedArithmetic for Decimal {
    #[inline]
    fn checked_addition(self, rhs: Self) -> NumericResult<Self> {
        self.checked_add(rhs)
            .ok_or_else(|| out_of_range(rhs.is_sign_negative()))
    }

    #[inline]
    fn checked_subtraction(self, rhs: Self) -> NumericResult<Self> {
        self.checked_sub(rhs)
            .ok_or_else(|| out_of_range(rhs.is_sign_positive()))
    }

    #[inline]
    fn checked_multiplication(self, rhs: Self) -> NumericResult<Self> {
        self.checked_mul(rhs)
            .ok_or_else(|| out_of_range(self.is_sign_negative() != rhs.is_sign_negative()))
    }

    #[inline]
    fn checked_division(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.checked_div(rhs)
            .ok_or_else(|| out_of_range(self.is_sign_negative() != rhs.is_sign_negative()))
    }
}
