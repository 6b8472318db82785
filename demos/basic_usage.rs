// ============================================================================
// Basic Usage Example
// ============================================================================

use arithmetic_kit::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

#[cfg(feature = "logging")]
fn setup_logging() {
    if let Err(e) = arithmetic_kit::utils::init_logging(tracing::Level::DEBUG) {
        eprintln!("{}", e);
    }
}

#[cfg(not(feature = "logging"))]
fn setup_logging() {}

fn main() {
    setup_logging();

    println!("=== Arithmetic Kit Example ===\n");

    // Plain bindings, IEEE-754 semantics
    println!("addition(2, 3)        = {}", addition(2.0, 3.0));
    println!("subtraction(5, 2)     = {}", subtraction(5.0, 2.0));
    println!("multiplication(4, 5)  = {}", multiplication(4.0, 5.0));
    println!("division(10, 2)       = {}", division(10.0, 2.0));
    println!("division(1, 0)        = {}", division(1.0, 0.0));

    // Checked semantics over other numeric types
    println!("\n=== Checked ===");
    println!(
        "i64 1 / 0             = {:?}",
        Operation::Division.apply_checked(1i64, 0)
    );
    println!(
        "i64 MAX + 1           = {:?}",
        Operation::Addition.apply_checked(i64::MAX, 1)
    );
    println!(
        "decimal 0.1 + 0.2     = {:?}",
        Operation::Addition.apply_checked(Decimal::new(1, 1), Decimal::new(2, 1))
    );

    // Calculator in checked mode, events recorded
    println!("\n=== Calculator ===");
    let events = Arc::new(RecordingEventHandler::new());
    let calculator = CalculatorBuilder::new("demo")
        .checked()
        .build(events.clone())
        .unwrap();

    for input in ["+", "-", "*", "/"] {
        let op: Operation = input.parse().unwrap();
        match calculator.evaluate(op, 10.0, 0.0) {
            Ok(result) => println!("10 {} 0 = {}", op.symbol(), result),
            Err(e) => println!("10 {} 0 failed: {}", op.symbol(), e),
        }
    }

    println!("\nEvents:");
    for event in events.events() {
        match event {
            CalculationEvent::Evaluated { calculation, .. } => {
                println!("  #{} {}", calculation.sequence, calculation.expression())
            },
            CalculationEvent::Rejected {
                sequence,
                operation,
                error,
                ..
            } => println!("  #{} {} rejected: {}", sequence, operation, error),
        }
    }

    println!("\n=== Example Complete ===");
}
