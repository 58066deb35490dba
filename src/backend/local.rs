//! In-process calculation backend.
//!
//! This module provides the reference [`CalculationBackend`] implementation:
//! exact decimal arithmetic on `rust_decimal` values with checked operations.
//! Division by zero and overflow come back as explicit `err` outcomes, matching
//! the contract the core expects from a remote service.
//!
//! The backend keeps a small amount of session state (last successful result,
//! operation count) purely so the `clear` signal has something real to reset;
//! the core never reads it.

use crate::backend::contract::CalculationBackend;
use crate::backend::messages::{CalculationOutcome, FailureReason};
use crate::domain::error::Result;
use crate::domain::Operator;
use rust_decimal::Decimal;

/// In-process exact decimal arithmetic backend.
///
/// The default injected dependency for embedders that do not bridge to a
/// remote service, and the test double for the integration suite.
#[derive(Debug, Default)]
pub struct LocalBackend {
    /// Most recent successful result, if any.
    last_result: Option<Decimal>,

    /// Number of calculations performed since the last clear.
    operations: u64,
}

impl LocalBackend {
    /// Creates a backend with empty session state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent successful result, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<Decimal> {
        self.last_result
    }

    /// Returns the number of calculations performed since the last clear.
    #[must_use]
    pub fn operations(&self) -> u64 {
        self.operations
    }

    fn apply(first: Decimal, second: Decimal, operator: Operator) -> CalculationOutcome {
        let value = match operator {
            Operator::Add => first.checked_add(second),
            Operator::Subtract => first.checked_sub(second),
            Operator::Multiply => first.checked_mul(second),
            Operator::Divide => {
                if second.is_zero() {
                    return CalculationOutcome::Err {
                        reason: FailureReason::DivisionByZero,
                    };
                }
                first.checked_div(second)
            }
        };

        value.map_or(
            CalculationOutcome::Err {
                reason: FailureReason::Overflow,
            },
            |value| CalculationOutcome::Ok { value },
        )
    }
}

impl CalculationBackend for LocalBackend {
    fn calculate(
        &mut self,
        first: Decimal,
        second: Decimal,
        operator: Operator,
    ) -> Result<CalculationOutcome> {
        let outcome = Self::apply(first, second, operator);
        self.operations += 1;

        if let CalculationOutcome::Ok { value } = outcome {
            self.last_result = Some(value);
        }

        tracing::debug!(
            %first,
            %second,
            operator = %operator,
            outcome = ?outcome,
            operations = self.operations,
            "calculation performed"
        );

        Ok(outcome)
    }

    fn clear(&mut self) -> Result<()> {
        tracing::debug!(operations = self.operations, "backend session cleared");
        self.last_result = None;
        self.operations = 0;
        Ok(())
    }
}
