// ============================================================================
// Calculation Domain Model
// ============================================================================

use super::Operation;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Record of one successful evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    /// Unique calculation identifier
    pub id: CalculationId,

    /// Position in the calculator's evaluation order
    pub sequence: u64,

    pub operation: Operation,
    #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
    pub lhs: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
    pub rhs: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
    pub result: f64,
}

impl Calculation {
    pub fn new(
        id: CalculationId,
        sequence: u64,
        operation: Operation,
        lhs: f64,
        rhs: f64,
        result: f64,
    ) -> Self {
        Self {
            id,
            sequence,
            operation,
            lhs,
            rhs,
            result,
        }
    }

    /// Infix rendering, e.g. `10 / 2 = 5`
    pub fn expression(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CalculationId::new(), CalculationId::new());

        let uuid = Uuid::new_v4();
        assert_eq!(CalculationId::from_uuid(uuid).as_uuid(), &uuid);
    }

    #[test]
    fn test_expression() {
        let calc = Calculation::new(CalculationId::new(), 0, Operation::Division, 10.0, 2.0, 5.0);
        assert_eq!(calc.expression(), "10 / 2 = 5");

        let inf = Calculation::new(
            CalculationId::new(),
            1,
            Operation::Division,
            1.0,
            0.0,
            f64::INFINITY,
        );
        assert_eq!(inf.expression(), "1 / 0 = inf");
    }
}
