//! Request dispatch and the transport-failure boundary.
//!
//! This is the single place a [`BackendRequest`] meets a [`CalculationBackend`].
//! The important guarantee lives here: every `Calculate` request yields exactly
//! one [`BackendResponse`], even when the backend call itself fails: a
//! transport failure is folded into an `err` outcome with reason
//! [`FailureReason::Unavailable`]. The state machine therefore clears its
//! loading flag on every path by handling responses alone, with no separate
//! failure channel to forget.
//!
//! `Clear` requests are fire-and-forget: errors are logged and swallowed, and
//! no response is produced.

use crate::backend::contract::CalculationBackend;
use crate::backend::messages::{BackendRequest, BackendResponse, CalculationOutcome, FailureReason};

/// Dispatches a request to the backend and returns the response, if any.
///
/// `Calculate` always yields `Some`; `Clear` always yields `None`.
pub fn handle_request(
    backend: &mut dyn CalculationBackend,
    request: BackendRequest,
) -> Option<BackendResponse> {
    let _span = tracing::debug_span!("backend_request", request = ?request).entered();

    match request {
        BackendRequest::Calculate {
            request_id,
            first,
            second,
            operator,
        } => {
            let outcome = match backend.calculate(first, second, operator) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::debug!(error = %e, request_id, "backend call failed");
                    CalculationOutcome::Err {
                        reason: FailureReason::Unavailable,
                    }
                }
            };
            Some(BackendResponse {
                request_id,
                outcome,
            })
        }
        BackendRequest::Clear => {
            if let Err(e) = backend.clear() {
                tracing::debug!(error = %e, "backend clear failed");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{RemcalcError, Result};
    use crate::domain::Operator;
    use rust_decimal::Decimal;

    /// Backend whose calls always fail at the transport level.
    struct UnreachableBackend;

    impl CalculationBackend for UnreachableBackend {
        fn calculate(
            &mut self,
            _first: Decimal,
            _second: Decimal,
            _operator: Operator,
        ) -> Result<CalculationOutcome> {
            Err(RemcalcError::Backend("connection refused".to_string()))
        }

        fn clear(&mut self) -> Result<()> {
            Err(RemcalcError::Backend("connection refused".to_string()))
        }
    }

    #[test]
    fn transport_failure_becomes_unavailable_outcome() {
        let mut backend = UnreachableBackend;
        let response = handle_request(
            &mut backend,
            BackendRequest::Calculate {
                request_id: 9,
                first: Decimal::ONE,
                second: Decimal::ONE,
                operator: Operator::Add,
            },
        )
        .expect("calculate always yields a response");

        assert_eq!(response.request_id, 9);
        assert_eq!(
            response.outcome,
            CalculationOutcome::Err {
                reason: FailureReason::Unavailable
            }
        );
    }

    #[test]
    fn clear_is_fire_and_forget() {
        let mut backend = UnreachableBackend;
        assert!(handle_request(&mut backend, BackendRequest::Clear).is_none());
    }
}
