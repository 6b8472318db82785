// ============================================================================
// Calculator Configuration
// Evaluation mode and identity of a calculator instance
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Arithmetic Mode
// ============================================================================

/// How a calculator treats division by zero and out-of-range results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticMode {
    /// Plain IEEE-754 floating point
    /// - `1/0` is infinity, `0/0` is NaN
    /// - Evaluation never fails
    #[default]
    Ieee754,

    /// Checked floating point
    /// - Zero divisor fails with `DivisionByZero`
    /// - Infinite result from finite operands fails with `Overflow`/`Underflow`
    /// - NaN operand or result fails with `InvalidInput`
    Checked,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for creating a calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Name used in logs and events (e.g., "pricing", "risk")
    pub name: String,

    /// Evaluation mode
    pub mode: ArithmeticMode,
}

impl CalculatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(name: impl Into<String>, mode: ArithmeticMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }

    /// IEEE-754 configuration
    pub fn ieee754(name: impl Into<String>) -> Self {
        Self::new(name, ArithmeticMode::Ieee754)
    }

    /// Checked configuration
    pub fn checked(name: impl Into<String>) -> Self {
        Self::new(name, ArithmeticMode::Checked)
    }

    /// Builder method: Set evaluation mode
    pub fn with_mode(mut self, mode: ArithmeticMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Calculator name cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::ieee754("default")
    }
}
