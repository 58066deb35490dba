//! Error types for the remcalc crate.
//!
//! This module defines the centralized error type [`RemcalcError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that *domain* failures of a calculation (division by zero, overflow) are not
//! represented here: those travel inside
//! [`CalculationOutcome`](crate::backend::CalculationOutcome) as the `err` variant of
//! the backend protocol. `RemcalcError` covers transport and environment failures.

use thiserror::Error;

/// The main error type for remcalc operations.
///
/// This enum consolidates the error conditions that can occur outside the
/// calculation protocol itself: the backend transport, configuration parsing,
/// and I/O. Most variants wrap underlying errors from external crates using
/// `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use remcalc::{RemcalcError, Result};
///
/// fn validate_config() -> Result<()> {
///     Err(RemcalcError::Config("missing trace_level".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum RemcalcError {
    /// Communication with the calculation backend failed.
    ///
    /// This is a transport-level failure (the call itself could not be made or
    /// did not complete), distinct from a calculation that completed with an
    /// explicit error outcome. The string contains details about the failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for remcalc operations.
///
/// This is a type alias for `std::result::Result<T, RemcalcError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, RemcalcError>;
