// ============================================================================
// Domain Models Module
// Contains the operation vocabulary and calculator value objects
// ============================================================================

pub mod calculation;
pub mod config;
pub mod operation;

pub use calculation::{Calculation, CalculationId};
pub use config::{ArithmeticMode, CalculatorConfig};
pub use operation::Operation;
