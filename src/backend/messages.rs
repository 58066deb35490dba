//! Backend request/response protocol types.
//!
//! This module defines the wire protocol between the calculator core and the
//! external calculation service. The core emits [`BackendRequest`] values and
//! consumes [`BackendResponse`] values; how they travel (in-process call, IPC,
//! HTTP) is the embedder's concern. All types serialize to JSON via the
//! [`to_json`](BackendRequest::to_json)/[`from_json`](BackendRequest::from_json)
//! helpers so remote transports can carry them unchanged.
//!
//! A calculation's result is a sum type, [`CalculationOutcome`]: domain
//! failures such as division by zero arrive as the `err` variant, never as a
//! transport fault. Every `Calculate` request carries a `request_id` drawn from
//! the state machine's generation counter; responses echo it back so a reply
//! that arrives after a `clear()` can be recognized as stale and discarded.

use crate::domain::error::{RemcalcError, Result};
use crate::domain::Operator;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Requests sent from the calculator core to the calculation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendRequest {
    /// Apply a binary operation to two operands.
    Calculate {
        /// Generation token echoed back in the response for staleness checks.
        request_id: u64,

        /// Left-hand operand.
        first: Decimal,

        /// Right-hand operand.
        second: Decimal,

        /// Operation to apply.
        operator: Operator,
    },

    /// Reset any session state the backend keeps. Fire-and-forget: the core
    /// does not consume a response for this request.
    Clear,
}

/// Response to a `Calculate` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendResponse {
    /// Generation token copied from the originating request.
    pub request_id: u64,

    /// The calculation's outcome.
    pub outcome: CalculationOutcome,
}

/// Result of a calculation: a value, or an explicit failure.
///
/// Serializes as `{"ok": {"value": ...}}` or `{"err": {"reason": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationOutcome {
    /// The operation completed; `value` is the exact decimal result.
    Ok {
        /// Result value.
        value: Decimal,
    },

    /// The operation failed in the backend's domain, or the transport to the
    /// backend failed. Either way the display shows the error marker.
    Err {
        /// Why the calculation produced no value.
        reason: FailureReason,
    },
}

/// Reasons a calculation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The divisor was zero.
    DivisionByZero,

    /// The result does not fit the backend's numeric range.
    Overflow,

    /// The backend could not be reached or the call itself failed.
    Unavailable,
}

impl BackendRequest {
    /// Serializes the request to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RemcalcError::Backend`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| RemcalcError::Backend(e.to_string()))
    }

    /// Deserializes a request from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RemcalcError::Backend`] if the payload is not a valid request.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| RemcalcError::Backend(e.to_string()))
    }
}

impl BackendResponse {
    /// Serializes the response to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RemcalcError::Backend`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| RemcalcError::Backend(e.to_string()))
    }

    /// Deserializes a response from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RemcalcError::Backend`] if the payload is not a valid response.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| RemcalcError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_request_round_trips_through_json() {
        let request = BackendRequest::Calculate {
            request_id: 7,
            first: Decimal::from(3),
            second: Decimal::new(45, 1),
            operator: Operator::Multiply,
        };
        let payload = request.to_json().expect("serialize");
        assert_eq!(BackendRequest::from_json(&payload).expect("parse"), request);
    }

    #[test]
    fn operator_travels_as_its_symbol() {
        let request = BackendRequest::Calculate {
            request_id: 1,
            first: Decimal::ONE,
            second: Decimal::ONE,
            operator: Operator::Divide,
        };
        let payload = request.to_json().expect("serialize");
        assert!(payload.contains("\"operator\":\"/\""));
    }

    #[test]
    fn outcome_variants_round_trip() {
        for outcome in [
            CalculationOutcome::Ok {
                value: Decimal::new(-95, 1),
            },
            CalculationOutcome::Err {
                reason: FailureReason::DivisionByZero,
            },
        ] {
            let response = BackendResponse {
                request_id: 3,
                outcome: outcome.clone(),
            };
            let payload = response.to_json().expect("serialize");
            assert_eq!(
                BackendResponse::from_json(&payload).expect("parse"),
                response
            );
        }
    }

    #[test]
    fn malformed_payload_is_a_backend_error() {
        assert!(BackendResponse::from_json("{not json").is_err());
    }
}
