//! View model representing renderable calculator state.
//!
//! This module defines the immutable view model computed from calculator
//! state. It contains no logic of its own: presentation (button layout,
//! styling, the loading spinner) is entirely the embedder's concern; the view
//! model is just the data it renders from.

use crate::app::phase::Phase;
use crate::domain::Operator;

/// Render-facing snapshot of the calculator.
///
/// Created via [`CalcState::compute_viewmodel`](crate::CalcState::compute_viewmodel)
/// or [`Calculator::viewmodel`](crate::Calculator::viewmodel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayViewModel {
    /// The display text: a numeric literal or the error marker.
    pub text: String,

    /// Whether a calculation is outstanding (drives the spinner).
    pub is_loading: bool,

    /// The operator awaiting its second operand, for an active-operation
    /// indicator.
    pub pending_operator: Option<Operator>,

    /// The derived phase, for presentation decisions like error styling.
    pub phase: Phase,
}
