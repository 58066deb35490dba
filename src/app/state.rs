//! Calculator state container and entry mutators.
//!
//! This module defines [`CalcState`], the single source of truth for the
//! calculator: the display text, the pending first operand and operator, the
//! waiting-for-second-operand flag, the loading flag, and the request
//! generation counter. It is mutated only by the event handler
//! ([`handle_event`](crate::app::handle_event)) through the methods here;
//! presentation reads it through accessors or the computed view model.
//!
//! # State Components
//!
//! - **Display**: numeric literal under construction, or the error marker
//! - **First operand**: left-hand side of the pending or last-completed
//!   operation
//! - **Operator**: the operation awaiting its second operand
//! - **Waiting flag**: the next digit press starts a fresh number
//! - **Loading flag**: a calculation request is outstanding
//! - **Generation**: monotonic counter stamped onto every request; advanced by
//!   `clear` so late responses for superseded requests are discarded

use crate::app::phase::Phase;
use crate::backend::{BackendRequest, BackendResponse, CalculationOutcome};
use crate::domain::number::{format_value, parse_display, ERROR_TEXT};
use crate::domain::Operator;
use crate::ui::viewmodel::DisplayViewModel;
use rust_decimal::Decimal;

/// Central calculator state container.
///
/// All fields initialize to `("0", None, None, false, false)`. Mutation goes
/// through the event handler; the facade and view model expose read access.
#[derive(Debug, Clone)]
pub struct CalcState {
    /// Value currently shown: a numeric literal under construction or the
    /// error marker. Contains at most one decimal point; never empty.
    pub(crate) display: String,

    /// Left-hand operand of the pending or most recently completed operation.
    pub(crate) first_operand: Option<Decimal>,

    /// Operator awaiting application.
    pub(crate) operator: Option<Operator>,

    /// When set, the next digit press starts a fresh number instead of
    /// appending to the display.
    pub(crate) waiting_for_second_operand: bool,

    /// A calculation request is outstanding. All input except clear is
    /// ignored while set.
    pub(crate) loading: bool,

    /// Request generation counter. Each issued request carries the current
    /// value as its id; `reset` advances it so stale responses never apply.
    pub(crate) generation: u64,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Creates a state machine in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            waiting_for_second_operand: false,
            loading: false,
            generation: 0,
        }
    }

    /// The text to render: a numeric literal or the error marker.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Whether a calculation request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The operand captured for the pending or last-completed operation.
    #[must_use]
    pub fn first_operand(&self) -> Option<Decimal> {
        self.first_operand
    }

    /// The operator awaiting its second operand.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit press starts a fresh number.
    #[must_use]
    pub fn waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// Restores the initial state and advances the request generation.
    ///
    /// The generation bump is what invalidates an in-flight calculation: its
    /// response arrives carrying the old id and is discarded by
    /// [`apply_response`](Self::apply_response).
    pub(crate) fn reset(&mut self) {
        self.display = "0".to_string();
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_second_operand = false;
        self.loading = false;
        self.generation += 1;
    }

    /// Enters a digit. Returns whether the display changed.
    ///
    /// Escapes the error state with a local reset first, then either starts
    /// the second operand (waiting flag set), replaces a bare `"0"`, or
    /// appends. The caller validates that `digit` is an ASCII digit.
    pub(crate) fn input_digit(&mut self, digit: char) -> bool {
        if self.display == ERROR_TEXT {
            tracing::debug!("digit entry escaping error state");
            self.reset();
        }

        if self.waiting_for_second_operand {
            self.display = digit.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        true
    }

    /// Enters the decimal point. Returns whether the display changed.
    ///
    /// Idempotent per operand: a second press while the display already
    /// contains a point is a no-op.
    pub(crate) fn input_decimal(&mut self) -> bool {
        if self.display == ERROR_TEXT {
            tracing::debug!("decimal entry escaping error state");
            self.reset();
        }

        if self.waiting_for_second_operand {
            self.display = "0.".to_string();
            self.waiting_for_second_operand = false;
            return true;
        }

        if self.display.contains('.') {
            return false;
        }
        self.display.push('.');
        true
    }

    /// Parses the display as an operand value, if it holds one.
    #[must_use]
    pub(crate) fn current_value(&self) -> Option<Decimal> {
        parse_display(&self.display)
    }

    /// Starts a calculation: marks the machine loading and produces the
    /// request to dispatch.
    ///
    /// Returns `None` when no first operand is held. That case is unreachable
    /// given the handler's transitions; the guard keeps a future caller from
    /// issuing a half-formed request.
    pub(crate) fn begin_calculation(
        &mut self,
        operator: Operator,
        second: Decimal,
    ) -> Option<BackendRequest> {
        let first = self.first_operand?;

        self.generation += 1;
        self.loading = true;

        tracing::debug!(
            request_id = self.generation,
            %first,
            %second,
            operator = %operator,
            "calculation started"
        );

        Some(BackendRequest::Calculate {
            request_id: self.generation,
            first,
            second,
            operator,
        })
    }

    /// Applies a calculation response. Returns whether state changed.
    ///
    /// A response is stale, and discarded, unless the machine is still
    /// loading and the response id matches the current generation. On success
    /// the result becomes both the display text and the new first operand; on
    /// failure the display shows the error marker and the first operand is
    /// preserved. The loading flag clears on both outcomes.
    pub(crate) fn apply_response(&mut self, response: &BackendResponse) -> bool {
        if !self.loading || response.request_id != self.generation {
            tracing::debug!(
                request_id = response.request_id,
                generation = self.generation,
                loading = self.loading,
                "discarding stale calculation response"
            );
            return false;
        }

        match &response.outcome {
            CalculationOutcome::Ok { value } => {
                self.display = format_value(*value);
                self.first_operand = Some(*value);
                tracing::debug!(result = %self.display, "calculation succeeded");
            }
            CalculationOutcome::Err { reason } => {
                tracing::debug!(reason = ?reason, "calculation failed");
                self.display = ERROR_TEXT.to_string();
            }
        }

        self.loading = false;
        true
    }

    /// Derives the current phase from the field combination.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Computing
        } else if self.display == ERROR_TEXT {
            Phase::Error
        } else if self.operator.is_some() && self.waiting_for_second_operand {
            Phase::AwaitingSecondOperand
        } else if self.first_operand.is_some() || self.operator.is_some() {
            Phase::OperandEntered
        } else {
            Phase::Idle
        }
    }

    /// Computes the render-facing view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DisplayViewModel {
        DisplayViewModel {
            text: self.display.clone(),
            is_loading: self.loading,
            pending_operator: self.operator,
            phase: self.phase(),
        }
    }
}
