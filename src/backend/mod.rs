//! External calculation capability: contract, protocol, and reference backend.
//!
//! The calculator core never computes a binary operation itself. This module
//! holds everything about its external collaborator: the request/response
//! protocol the state machine speaks, the trait the embedder injects, the
//! dispatch boundary that guarantees one response per calculation request, and
//! an in-process reference implementation.
//!
//! # Modules
//!
//! - `contract`: [`CalculationBackend`] trait abstraction
//! - `messages`: Request/response protocol types with JSON wire helpers
//! - `dispatch`: Request execution and the transport-failure boundary
//! - `local`: In-process exact decimal arithmetic backend

pub mod contract;
pub mod dispatch;
pub mod local;
pub mod messages;

pub use contract::CalculationBackend;
pub use dispatch::handle_request;
pub use local::LocalBackend;
pub use messages::{BackendRequest, BackendResponse, CalculationOutcome, FailureReason};
