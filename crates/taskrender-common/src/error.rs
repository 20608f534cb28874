//! Unified error types for the taskrender workspace.
//!
//! The display text of the first three variants is surfaced verbatim to the
//! invoking pipeline as its failure message.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The task definition file does not exist.
    #[error("Task definition file does not exist: {path}")]
    FileNotFound {
        /// Path exactly as supplied by the caller.
        path: String,
    },

    /// The document has no `containerDefinitions` array.
    #[error(
        "Invalid task definition format: containerDefinitions section is not present or is not an array"
    )]
    InvalidFormat,

    /// No container definition carries the requested name.
    #[error("Invalid task definition: Could not find container definition with matching name")]
    ContainerNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RenderError>;
