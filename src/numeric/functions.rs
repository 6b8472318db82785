// ============================================================================
// Math Functions
// The four elementary operations over f64 operand pairs
// ============================================================================

/// Two-argument numeric function shape shared by all four operations.
///
/// Plain `fn` pointer: every binding is pure, so it can be stored in tables,
/// passed across threads and compared for identity.
pub type MathFunction = fn(f64, f64) -> f64;

/// Returns `a + b`.
#[inline]
pub fn addition(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[inline]
pub fn subtraction(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[inline]
pub fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b` with IEEE-754 semantics.
///
/// A zero divisor does not fail: `1/0` is `+inf`, `-1/0` is `-inf` and
/// `0/0` is NaN. Use [`CheckedArithmetic`](super::CheckedArithmetic) for an
/// error instead.
#[inline]
pub fn division(a: f64, b: f64) -> f64 {
    a / b
}
