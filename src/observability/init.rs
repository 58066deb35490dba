//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an [`EnvFilter`] resolving
//! the trace level, and a fmt layer writing to a file so embedders whose
//! stderr belongs to their own UI still get logs.

use crate::infrastructure::paths;
use crate::Config;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.trace_file` if set, otherwise `remcalc.log` in the platform data
/// directory (see [`paths::get_data_dir`]).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let trace_path = match &config.trace_file {
        Some(path) => PathBuf::from(path),
        None => {
            let data_dir = paths::get_data_dir();
            if std::fs::create_dir_all(&data_dir).is_err() {
                // Silently fail if we can't create the directory
                return;
            }
            data_dir.join("remcalc.log")
        }
    };

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&trace_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)));

    let _ = subscriber.try_init();
}
