//! Error types for quickswitch.
//!
//! The search core is total: classification, matching and ranking never fail.
//! Errors only arise at the impure edges, when loading the state snapshot,
//! reading configuration, or driving the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every edge failure
//!   - [`SnapshotError`] - State snapshot loading failures
//!   - [`crate::config::ConfigError`] - Configuration file failures
//!   - [`crate::logging::LoggingError`] - Log sink setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! Catalog inconsistencies (a group member or DM peer that does not resolve)
//! are not errors: the affected conversation is left out and a `debug!` event
//! is recorded.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the state snapshot.
    #[error("Failed to load state snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Failed to load configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to set up logging.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading a state snapshot document.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file does not exist.
    #[error("Snapshot file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The snapshot file exists but could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document is not valid JSON of the expected shape.
    #[error("Invalid snapshot JSON in {path}: {source}")]
    Json {
        /// Path with invalid content.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
