//! Structured logging via `tracing`.
//!
//! The state machine, dispatch boundary, and backends all emit `tracing`
//! spans and events. This module wires them to a subscriber writing to a
//! file, since an embedder's stderr typically belongs to its own UI.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early, before constructing the calculator:
//!
//! ```rust
//! use remcalc::{observability::init_tracing, Config};
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("calculator initializing");
//! ```

mod init;

pub use init::init_tracing;
