// ============================================================================
// Calculator
// Evaluates operations under a configured arithmetic mode
// ============================================================================

use crate::domain::{ArithmeticMode, Calculation, CalculationId, CalculatorConfig, Operation};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::NumericResult;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Stateless-arithmetic calculator with event reporting.
///
/// The only mutable state is the sequence counter, so a single instance can
/// be shared across threads behind an `Arc`.
pub struct Calculator {
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Sequence counter, one tick per evaluation attempt
    sequence_counter: AtomicU64,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
            sequence_counter: AtomicU64::new(0),
        }
    }

    /// Evaluate `lhs <op> rhs`.
    ///
    /// In `Ieee754` mode this never fails. In `Checked` mode a zero divisor,
    /// an out-of-range result or a NaN is returned as an error and reported
    /// as a `Rejected` event.
    pub fn evaluate(&self, operation: Operation, lhs: f64, rhs: f64) -> NumericResult<f64> {
        let (result, event) = self.run(operation, lhs, rhs);
        self.event_handler.on_event(event);
        result
    }

    /// Evaluate every item in order, one result per item.
    ///
    /// Events are handed to the handler as a single batch.
    pub fn evaluate_batch(&self, items: &[(Operation, f64, f64)]) -> Vec<NumericResult<f64>> {
        let (results, events): (Vec<_>, Vec<_>) = items
            .iter()
            .map(|&(operation, lhs, rhs)| self.run(operation, lhs, rhs))
            .unzip();

        if !events.is_empty() {
            self.event_handler.on_events(events);
        }

        results
    }

    fn run(
        &self,
        operation: Operation,
        lhs: f64,
        rhs: f64,
    ) -> (NumericResult<f64>, CalculationEvent) {
        let id = CalculationId::new();
        let sequence = self.sequence_counter.fetch_add(1, Ordering::AcqRel);

        let outcome = match self.config.mode {
            ArithmeticMode::Ieee754 => Ok(operation.apply(lhs, rhs)),
            ArithmeticMode::Checked => operation.apply_checked(lhs, rhs),
        };

        match outcome {
            Ok(result) => {
                trace!(
                    calculator = %self.config.name,
                    sequence,
                    %operation,
                    lhs,
                    rhs,
                    result,
                    "evaluated"
                );
                let calculation = Calculation::new(id, sequence, operation, lhs, rhs, result);
                (
                    Ok(result),
                    CalculationEvent::Evaluated {
                        calculation,
                        timestamp: Utc::now(),
                    },
                )
            },
            Err(error) => {
                debug!(
                    calculator = %self.config.name,
                    sequence,
                    %operation,
                    lhs,
                    rhs,
                    %error,
                    "rejected"
                );
                (
                    Err(error),
                    CalculationEvent::Rejected {
                        id,
                        sequence,
                        operation,
                        lhs,
                        rhs,
                        error,
                        timestamp: Utc::now(),
                    },
                )
            },
        }
    }

    /// Number of evaluations attempted so far, rejected ones included
    pub fn evaluation_count(&self) -> u64 {
        self.sequence_counter.load(Ordering::Acquire)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn mode(&self) -> ArithmeticMode {
        self.config.mode
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }
}
