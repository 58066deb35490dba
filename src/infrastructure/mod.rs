//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently limited to platform data-directory resolution for the optional
//! trace file.

pub mod paths;

pub use paths::get_data_dir;
