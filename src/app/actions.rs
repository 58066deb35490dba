//! Actions representing side effects to be executed by the embedder.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing a key press. Actions bridge
//! pure state transformations and effectful operations, here talking to the
//! calculation backend.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! [`Calculator`](crate::Calculator) facade executes them by dispatching to the
//! injected backend and feeding responses back in as events; an embedder with a
//! remote backend ships the request over its own transport instead.

use crate::backend::BackendRequest;

/// Commands representing side effects to be executed outside the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the calculation backend.
    ///
    /// Emitted once per completed operator/equals action (a `Calculate`
    /// request) and once per clear press (a `Clear` request).
    PostToBackend(BackendRequest),
}
