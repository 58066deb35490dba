//! Remcalc: an interactive keypad calculator core with a remote calculation backend.
//!
//! Remcalc is the logic core of a calculator whose arithmetic is performed by
//! an external calculation service rather than locally:
//! - A state machine turning key-press events into well-formed
//!   `(first operand, operator, second operand)` requests
//! - Operator chaining (a new operator applies the pending calculation first)
//!   and equals finalization
//! - Asynchronous result reconciliation with stale-response discarding
//! - A pluggable backend contract with an in-process reference implementation
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Calculator Facade (calculator.rs)                  │  ← Key-press surface
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Transition logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Backend Layer │   │ Domain Layer  │
//! │ (ui/)         │   │ (backend/)    │   │ (domain/)     │
//! │ - View model  │   │ - Contract    │   │ - Operators   │
//! └───────────────┘   │ - Protocol    │   │ - Numbers     │
//!                     │ - Dispatch    │   │ - Errors      │
//!                     │ - Local impl  │   └───────────────┘
//!                     └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/) + Infrastructure    │  ← Optional
//! │  - tracing subscriber, file output, data dirs       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Calculator state machine with event/action model
//! - [`backend`]: Calculation service contract, wire protocol, local backend
//! - [`domain`]: Core domain types (operators, display numbers, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Render-facing view model
//! - [`observability`]: Tracing subscriber setup
//!
//! # Examples
//!
//! ## Facade usage
//!
//! ```
//! use remcalc::{Calculator, LocalBackend, Operator};
//!
//! let mut calc = Calculator::new(Box::new(LocalBackend::new()));
//!
//! // 12.5 * 2 =
//! calc.press_digit('1');
//! calc.press_digit('2');
//! calc.press_decimal();
//! calc.press_digit('5');
//! calc.press_operator(Operator::Multiply);
//! calc.press_digit('2');
//! calc.press_equals();
//!
//! assert_eq!(calc.display_text(), "25");
//! ```
//!
//! ## Driving the state machine directly
//!
//! Embedders with a remote backend drive [`handle_event`] themselves: dispatch
//! the emitted requests over their transport and feed responses back as
//! [`Event::BackendResponse`] when they arrive.
//!
//! ```
//! use remcalc::{handle_event, CalcState, Event, Operator};
//!
//! let mut state = CalcState::new();
//! handle_event(&mut state, &Event::Digit('7'))?;
//! let (_, actions) = handle_event(&mut state, &Event::Operator(Operator::Add))?;
//! assert!(actions.is_empty()); // first operator only captures the operand
//! # Ok::<(), remcalc::RemcalcError>(())
//! ```

pub mod app;
pub mod backend;
pub mod calculator;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, CalcState, Event, Phase};
pub use backend::{
    BackendRequest, BackendResponse, CalculationBackend, CalculationOutcome, FailureReason,
    LocalBackend,
};
pub use calculator::Calculator;
pub use domain::{Operator, RemcalcError, Result};
pub use ui::DisplayViewModel;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Crate configuration.
///
/// Covers the ambient concerns only; the state machine itself has no knobs.
/// Values come from the embedder, either as a string map
/// ([`Config::from_map`]) or a TOML file ([`Config::from_file`]).
///
/// # Example
///
/// ```toml
/// # remcalc.toml
/// trace_level = "debug"
/// trace_file = "/tmp/remcalc-trace.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing level for the subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// Overridden by `RUST_LOG` when set.
    pub trace_level: Option<String>,

    /// Path to the trace output file.
    ///
    /// Defaults to `remcalc.log` in the platform data directory.
    pub trace_file: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Embedding hosts often hand configuration over as flat string pairs;
    /// this constructor extracts the known keys and ignores the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use remcalc::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert_eq!(config.trace_file, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            trace_level: config.get("trace_level").cloned(),
            trace_file: config.get("trace_file").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Unknown keys are ignored; missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RemcalcError::Io`] if the file cannot be read and
    /// [`RemcalcError::Config`] if it is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| RemcalcError::Config(e.to_string()))
    }
}

/// Initializes the crate with configuration and returns a fresh state machine.
///
/// Sets up the tracing subscriber (idempotent) and constructs a [`CalcState`]
/// in its initial state. Embedders using the [`Calculator`] facade get the
/// same behavior through [`Calculator::with_config`].
#[must_use]
pub fn initialize(config: &Config) -> CalcState {
    observability::init_tracing(config);
    tracing::debug!("initializing calculator state machine");
    CalcState::new()
}
