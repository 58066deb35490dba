//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes key presses
//! and backend responses, translating them into state changes and action
//! sequences. Every transition the calculator makes lives here.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the embedder (key presses) or the backend (responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`CalcState`] methods
//! 4. Actions are collected and returned for execution
//!
//! # The loading guard
//!
//! While a calculation is in flight the machine is `Computing`: every event
//! except `Clear` and the response itself is ignored by a single guard at the
//! top of the handler. This is what guarantees at most one outstanding request:
//! repeated operator/equals presses during the window produce no actions.

use crate::app::actions::Action;
use crate::app::state::CalcState;
use crate::backend::{BackendRequest, BackendResponse};
use crate::domain::error::Result;
use crate::domain::Operator;

/// Events triggered by key presses or backend responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A digit key (`'0'..='9'`) was pressed. Other characters are ignored.
    Digit(char),

    /// The decimal point key was pressed.
    Decimal,

    /// An operator key was pressed.
    Operator(Operator),

    /// The equals key was pressed.
    Equals,

    /// The clear key was pressed.
    Clear,

    /// The backend answered a `Calculate` request.
    BackendResponse(BackendResponse),
}

/// Processes an event, mutates calculator state, and returns actions to execute.
///
/// Returns `(should_render, actions)`: whether the visible state changed, and
/// the backend requests to dispatch. The embedder executes each action and
/// feeds any resulting [`BackendResponse`] back in as an
/// [`Event::BackendResponse`].
///
/// # Errors
///
/// The handler itself is total over its input and currently always returns
/// `Ok`; the `Result` is part of the contract so embedders already propagate
/// failures from their own dispatch path uniformly.
pub fn handle_event(state: &mut CalcState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    // Computing blocks all input except clear; responses pass through.
    if state.loading && !matches!(event, Event::Clear | Event::BackendResponse(_)) {
        tracing::debug!("ignoring input while a calculation is in flight");
        return Ok((false, vec![]));
    }

    match event {
        Event::Digit(digit) => {
            if !digit.is_ascii_digit() {
                tracing::debug!(key = %digit, "ignoring non-digit key");
                return Ok((false, vec![]));
            }
            Ok((state.input_digit(*digit), vec![]))
        }

        Event::Decimal => Ok((state.input_decimal(), vec![])),

        Event::Operator(next) => {
            let Some(value) = state.current_value() else {
                tracing::debug!(display = %state.display, "operator pressed on unparseable display");
                return Ok((false, vec![]));
            };

            let mut actions = vec![];

            if state.first_operand.is_none() {
                tracing::debug!(%value, "first operand captured");
                state.first_operand = Some(value);
            } else if let Some(pending) = state.operator {
                // Chained operation: the pending calculation runs with the
                // display value as its second operand, and its outcome becomes
                // the next first operand when the response applies.
                if let Some(request) = state.begin_calculation(pending, value) {
                    actions.push(Action::PostToBackend(request));
                }
            }

            state.operator = Some(*next);
            state.waiting_for_second_operand = true;
            Ok((true, actions))
        }

        Event::Equals => {
            let Some(pending) = state.operator else {
                tracing::debug!("equals with no pending operator");
                return Ok((false, vec![]));
            };
            if state.first_operand.is_none() {
                tracing::debug!("equals with no first operand");
                return Ok((false, vec![]));
            }
            let Some(value) = state.current_value() else {
                tracing::debug!(display = %state.display, "equals pressed on unparseable display");
                return Ok((false, vec![]));
            };

            let mut actions = vec![];
            if let Some(request) = state.begin_calculation(pending, value) {
                actions.push(Action::PostToBackend(request));
            }

            state.operator = None;
            state.waiting_for_second_operand = true;
            Ok((true, actions))
        }

        Event::Clear => {
            tracing::debug!("clearing calculator state");
            state.reset();
            Ok((true, vec![Action::PostToBackend(BackendRequest::Clear)]))
        }

        Event::BackendResponse(response) => Ok((state.apply_response(response), vec![])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::phase::Phase;
    use crate::backend::{CalculationOutcome, FailureReason};
    use crate::domain::number::ERROR_TEXT;
    use rust_decimal::Decimal;

    fn press(state: &mut CalcState, event: Event) -> Vec<Action> {
        let (_, actions) = handle_event(state, &event).expect("handler is total");
        actions
    }

    fn type_digits(state: &mut CalcState, digits: &str) {
        for d in digits.chars() {
            press(state, Event::Digit(d));
        }
    }

    /// Extracts the calculate request from a one-action list.
    fn calculate_request(actions: &[Action]) -> (u64, Decimal, Decimal, Operator) {
        assert_eq!(actions.len(), 1, "expected exactly one dispatched request");
        match &actions[0] {
            Action::PostToBackend(BackendRequest::Calculate {
                request_id,
                first,
                second,
                operator,
            }) => (*request_id, *first, *second, *operator),
            other => panic!("expected a calculate request, got {other:?}"),
        }
    }

    fn respond_ok(state: &mut CalcState, request_id: u64, value: i64) {
        press(
            state,
            Event::BackendResponse(BackendResponse {
                request_id,
                outcome: CalculationOutcome::Ok {
                    value: Decimal::from(value),
                },
            }),
        );
    }

    #[test]
    fn digit_entry_collapses_leading_zero() {
        let mut state = CalcState::new();
        type_digits(&mut state, "05");
        assert_eq!(state.display_text(), "5");

        type_digits(&mut state, "12");
        assert_eq!(state.display_text(), "512");
    }

    #[test]
    fn decimal_press_is_idempotent() {
        let mut state = CalcState::new();
        type_digits(&mut state, "1");
        press(&mut state, Event::Decimal);
        assert_eq!(state.display_text(), "1.");

        let (changed, _) = handle_event(&mut state, &Event::Decimal).expect("handler is total");
        assert!(!changed);
        assert_eq!(state.display_text(), "1.");

        type_digits(&mut state, "5");
        assert_eq!(state.display_text(), "1.5");
    }

    #[test]
    fn decimal_starts_second_operand_at_zero_point() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        press(&mut state, Event::Decimal);
        assert_eq!(state.display_text(), "0.");
        assert!(!state.waiting_for_second_operand());
    }

    #[test]
    fn first_operator_captures_operand_without_dispatching() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        let actions = press(&mut state, Event::Operator(Operator::Add));

        assert!(actions.is_empty());
        assert_eq!(state.first_operand(), Some(Decimal::from(3)));
        assert_eq!(state.operator(), Some(Operator::Add));
        assert!(state.waiting_for_second_operand());
        assert_eq!(state.phase(), Phase::AwaitingSecondOperand);
    }

    #[test]
    fn operator_chaining_computes_through_to_equals() {
        let mut state = CalcState::new();

        // 3 + 4 + 2 = : the second `+` triggers 3 + 4, equals triggers 7 + 2.
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        type_digits(&mut state, "4");

        let actions = press(&mut state, Event::Operator(Operator::Add));
        let (id, first, second, op) = calculate_request(&actions);
        assert_eq!((first, second, op), (Decimal::from(3), Decimal::from(4), Operator::Add));
        assert!(state.is_loading());

        respond_ok(&mut state, id, 7);
        assert_eq!(state.display_text(), "7");
        assert_eq!(state.first_operand(), Some(Decimal::from(7)));
        assert!(!state.is_loading());

        type_digits(&mut state, "2");
        let actions = press(&mut state, Event::Equals);
        let (id, first, second, op) = calculate_request(&actions);
        assert_eq!((first, second, op), (Decimal::from(7), Decimal::from(2), Operator::Add));
        assert_eq!(state.operator(), None);

        respond_ok(&mut state, id, 9);
        assert_eq!(state.display_text(), "9");
    }

    #[test]
    fn equals_without_pending_operator_is_a_noop() {
        let mut state = CalcState::new();
        type_digits(&mut state, "42");

        let (changed, actions) = handle_event(&mut state, &Event::Equals).expect("handler is total");
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.display_text(), "42");
        assert_eq!(state.first_operand(), None);
        assert_eq!(state.operator(), None);
    }

    #[test]
    fn second_equals_does_not_repeat_the_operation() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        type_digits(&mut state, "4");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);
        respond_ok(&mut state, id, 7);

        let actions = press(&mut state, Event::Equals);
        assert!(actions.is_empty());
        assert_eq!(state.display_text(), "7");
    }

    #[test]
    fn operator_after_equals_reuses_the_result() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        type_digits(&mut state, "4");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);
        respond_ok(&mut state, id, 7);

        // No dispatch: the held result becomes the first operand of the next
        // operation directly.
        let actions = press(&mut state, Event::Operator(Operator::Multiply));
        assert!(actions.is_empty());
        assert_eq!(state.first_operand(), Some(Decimal::from(7)));
        assert_eq!(state.operator(), Some(Operator::Multiply));

        type_digits(&mut state, "2");
        let actions = press(&mut state, Event::Equals);
        let (_, first, second, op) = calculate_request(&actions);
        assert_eq!((first, second, op), (Decimal::from(7), Decimal::from(2), Operator::Multiply));
    }

    #[test]
    fn failed_calculation_shows_error_and_preserves_first_operand() {
        let mut state = CalcState::new();
        type_digits(&mut state, "5");
        press(&mut state, Event::Operator(Operator::Divide));
        type_digits(&mut state, "0");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);

        press(
            &mut state,
            Event::BackendResponse(BackendResponse {
                request_id: id,
                outcome: CalculationOutcome::Err {
                    reason: FailureReason::DivisionByZero,
                },
            }),
        );

        assert_eq!(state.display_text(), ERROR_TEXT);
        assert!(!state.is_loading());
        assert_eq!(state.first_operand(), Some(Decimal::from(5)));
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn digit_entry_escapes_the_error_state_like_a_clear() {
        let mut state = CalcState::new();
        type_digits(&mut state, "5");
        press(&mut state, Event::Operator(Operator::Divide));
        type_digits(&mut state, "0");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);
        press(
            &mut state,
            Event::BackendResponse(BackendResponse {
                request_id: id,
                outcome: CalculationOutcome::Err {
                    reason: FailureReason::DivisionByZero,
                },
            }),
        );

        type_digits(&mut state, "8");
        assert_eq!(state.display_text(), "8");
        // The escape reset the held operand: the next operator captures 8.
        assert_eq!(state.first_operand(), None);
        press(&mut state, Event::Operator(Operator::Add));
        assert_eq!(state.first_operand(), Some(Decimal::from(8)));
    }

    #[test]
    fn operator_on_error_display_is_ignored() {
        let mut state = CalcState::new();
        type_digits(&mut state, "5");
        press(&mut state, Event::Operator(Operator::Divide));
        type_digits(&mut state, "0");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);
        press(
            &mut state,
            Event::BackendResponse(BackendResponse {
                request_id: id,
                outcome: CalculationOutcome::Err {
                    reason: FailureReason::DivisionByZero,
                },
            }),
        );

        let (changed, actions) =
            handle_event(&mut state, &Event::Operator(Operator::Add)).expect("handler is total");
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.display_text(), ERROR_TEXT);
    }

    #[test]
    fn clear_resets_everything_and_signals_the_backend_once() {
        let mut state = CalcState::new();
        type_digits(&mut state, "12");
        press(&mut state, Event::Decimal);
        type_digits(&mut state, "5");
        press(&mut state, Event::Operator(Operator::Subtract));

        let actions = press(&mut state, Event::Clear);
        assert_eq!(
            actions,
            vec![Action::PostToBackend(BackendRequest::Clear)]
        );
        assert_eq!(state.display_text(), "0");
        assert_eq!(state.first_operand(), None);
        assert_eq!(state.operator(), None);
        assert!(!state.waiting_for_second_operand());
        assert!(!state.is_loading());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn no_second_request_is_issued_while_loading() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        type_digits(&mut state, "4");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);
        assert!(state.is_loading());

        // Hammer the keypad while the request is outstanding.
        for event in [
            Event::Equals,
            Event::Operator(Operator::Multiply),
            Event::Digit('9'),
            Event::Decimal,
        ] {
            let (changed, actions) = handle_event(&mut state, &event).expect("handler is total");
            assert!(!changed);
            assert!(actions.is_empty());
        }
        assert_eq!(state.phase(), Phase::Computing);

        respond_ok(&mut state, id, 7);
        assert_eq!(state.display_text(), "7");
    }

    #[test]
    fn clear_while_loading_discards_the_late_response() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        type_digits(&mut state, "4");
        let actions = press(&mut state, Event::Equals);
        let (stale_id, ..) = calculate_request(&actions);

        press(&mut state, Event::Clear);
        assert!(!state.is_loading());

        // The superseded request resolves after the clear: nothing applies.
        let (changed, _) = handle_event(
            &mut state,
            &Event::BackendResponse(BackendResponse {
                request_id: stale_id,
                outcome: CalculationOutcome::Ok {
                    value: Decimal::from(7),
                },
            }),
        )
        .expect("handler is total");

        assert!(!changed);
        assert_eq!(state.display_text(), "0");
        assert_eq!(state.first_operand(), None);
    }

    #[test]
    fn non_digit_keys_are_ignored() {
        let mut state = CalcState::new();
        let (changed, actions) =
            handle_event(&mut state, &Event::Digit('x')).expect("handler is total");
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn digit_after_result_starts_a_fresh_number() {
        let mut state = CalcState::new();
        type_digits(&mut state, "3");
        press(&mut state, Event::Operator(Operator::Add));
        type_digits(&mut state, "4");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);
        respond_ok(&mut state, id, 7);

        type_digits(&mut state, "5");
        assert_eq!(state.display_text(), "5");
    }

    #[test]
    fn result_formatting_round_trips_into_the_next_operand() {
        let mut state = CalcState::new();
        type_digits(&mut state, "5");
        press(&mut state, Event::Operator(Operator::Divide));
        type_digits(&mut state, "2");
        let actions = press(&mut state, Event::Equals);
        let (id, ..) = calculate_request(&actions);

        press(
            &mut state,
            Event::BackendResponse(BackendResponse {
                request_id: id,
                outcome: CalculationOutcome::Ok {
                    value: Decimal::new(25, 1),
                },
            }),
        );
        assert_eq!(state.display_text(), "2.5");

        // The fractional result carries into the next operation exactly.
        press(&mut state, Event::Operator(Operator::Multiply));
        type_digits(&mut state, "2");
        let actions = press(&mut state, Event::Equals);
        let (_, first, second, _) = calculate_request(&actions);
        assert_eq!(first, Decimal::new(25, 1));
        assert_eq!(second, Decimal::from(2));
    }
}
