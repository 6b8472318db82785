// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::config::{ArithmeticMode, CalculatorConfig};
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use arithmetic_kit::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::checked("risk");
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calculator.mode(), ArithmeticMode::Checked);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;

    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use arithmetic_kit::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new("pricing")
///     .checked()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(
///     calculator.evaluate(Operation::Division, 1.0, 0.0),
///     Err(NumericError::DivisionByZero)
/// );
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder; IEEE-754 mode unless changed
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::ieee754(name),
        }
    }

    /// Use IEEE-754 evaluation (default)
    pub fn ieee754(mut self) -> Self {
        self.config.mode = ArithmeticMode::Ieee754;
        self
    }

    /// Use checked evaluation
    pub fn checked(mut self) -> Self {
        self.config.mode = ArithmeticMode::Checked;
        self
    }

    pub fn with_mode(mut self, mode: ArithmeticMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Get the configuration (for inspection)
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_ieee_calculator() {
        let config = CalculatorConfig::ieee754("pricing");
        let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calc.name(), "pricing");
        assert_eq!(calc.mode(), ArithmeticMode::Ieee754);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::checked("");
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = CalculatorBuilder::new("risk").checked();
        assert_eq!(builder.config().mode, ArithmeticMode::Checked);

        let calc = builder
            .ieee754()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(calc.mode(), ArithmeticMode::Ieee754);
        assert_eq!(calc.config().name, "risk");
    }

    #[test]
    fn test_builder_with_mode() {
        let calc = CalculatorBuilder::new("audit")
            .with_mode(ArithmeticMode::Checked)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(calc.mode(), ArithmeticMode::Checked);
    }
}
