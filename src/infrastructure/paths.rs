//! Platform path resolution.
//!
//! This module locates the data directory used for the optional trace file.
//! Resolution follows the XDG convention with a home-directory fallback, and
//! degrades to the system temp directory when neither is available.

use std::path::PathBuf;

/// Returns the data directory for remcalc state (currently the trace file).
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/remcalc`
/// 2. `$HOME/.local/state/remcalc`
/// 3. the system temp directory, `remcalc` subdirectory
#[must_use]
pub fn get_data_dir() -> PathBuf {
    std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
        })
        .unwrap_or_else(std::env::temp_dir)
        .join("remcalc")
}
