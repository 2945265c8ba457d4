//! Error types for loading the known-builder registry.

use std::path::PathBuf;

/// Errors that can occur when loading the builder registry at startup.
///
/// The registry is required to serve reward queries, so any of these is a
/// fatal startup error: the process refuses to start without it.
#[derive(Debug, thiserror::Error)]
pub enum BuilderRegistryError {
    /// The registry file could not be read.
    #[error("Failed to read builder registry from {path}")]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not a valid JSON object of address to name.
    #[error("Builder registry at {path} is malformed")]
    Malformed {
        /// Path that was attempted
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
