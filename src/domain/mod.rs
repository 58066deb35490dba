//! Domain layer for the calculator core.
//!
//! This module contains the core domain types for the crate, independent of the
//! backend protocol or infrastructure concerns: the operator symbol type, the
//! display-text number rules, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`number`]: Display-text parsing and canonical result formatting
//! - [`operator`]: Binary operator symbol type

pub mod error;
pub mod number;
pub mod operator;

pub use error::{RemcalcError, Result};
pub use number::{format_value, parse_display, ERROR_TEXT};
pub use operator::Operator;
