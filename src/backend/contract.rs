//! Calculation backend abstraction.
//!
//! This module defines the [`CalculationBackend`] trait that abstracts over the
//! external calculation service. The core consumes this contract and never
//! computes a binary operation locally, so the arithmetic capability (and its
//! precision/overflow policy) can be swapped without touching the state machine.
//!
//! # Design Philosophy
//!
//! The trait is minimal: one method per operation the state machine dispatches.
//! Domain failures (division by zero, overflow) are data that comes back inside
//! [`CalculationOutcome`], while a `Result::Err` from either method means the
//! call itself failed (transport). The dispatch layer folds both into the same
//! user-visible error display.

use crate::backend::messages::CalculationOutcome;
use crate::domain::error::Result;
use crate::domain::Operator;
use rust_decimal::Decimal;

/// Abstraction over the external calculation service.
///
/// Implementations take `&mut self` because a backend may keep session state
/// (the reference [`LocalBackend`](crate::backend::LocalBackend) tracks its
/// last result and an operation count, reset by [`clear`](Self::clear)).
///
/// # Implementations
///
/// - [`LocalBackend`](crate::backend::LocalBackend): in-process exact decimal
///   arithmetic (default)
pub trait CalculationBackend: Send {
    /// Applies `operator` to `(first, second)` and returns the outcome.
    ///
    /// Division by zero, overflow, and any other domain failure must surface
    /// as [`CalculationOutcome::Err`], not as a `Result` error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the call itself fails (transport failure).
    fn calculate(
        &mut self,
        first: Decimal,
        second: Decimal,
        operator: Operator,
    ) -> Result<CalculationOutcome>;

    /// Resets any session state the backend keeps.
    ///
    /// Invoked fire-and-forget when the user presses clear; the core's local
    /// reset does not wait for it.
    ///
    /// # Errors
    ///
    /// Returns an error when the call itself fails. The dispatcher logs and
    /// swallows it.
    fn clear(&mut self) -> Result<()>;
}
