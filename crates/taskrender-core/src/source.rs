//! Loading task definitions from disk.

use serde_json::Value;
use taskrender_common::config::RenderConfig;
use taskrender_common::error::{RenderError, Result};

use crate::document::ValidDocument;

/// Reads and parses the task definition at `path`.
///
/// Relative paths resolve against the configured workspace directory.
///
/// # Errors
///
/// Returns `FileNotFound` (naming `path` as given) if the file does not
/// exist, `InvalidFormat` if its contents are not JSON, or `Io` if it
/// cannot be read.
pub fn load(config: &RenderConfig, path: &str) -> Result<Value> {
    let resolved = config.resolve(path);
    tracing::info!(path = %resolved.display(), "loading task definition");

    if !resolved.exists() {
        return Err(RenderError::FileNotFound {
            path: path.to_string(),
        });
    }

    let content = std::fs::read_to_string(&resolved).map_err(|source| RenderError::Io {
        path: resolved.clone(),
        source,
    })?;

    // A leading UTF-8 byte order mark is not part of the JSON text.
    let json = content.strip_prefix('\u{feff}').unwrap_or(&content);
    serde_json::from_str(json).map_err(|err| {
        tracing::debug!(error = %err, "task definition is not valid JSON");
        RenderError::InvalidFormat
    })
}

/// Reads the task definition at `path` and validates its shape.
///
/// # Errors
///
/// Returns any error from [`load`] or [`ValidDocument::parse`].
pub fn load_document(config: &RenderConfig, path: &str) -> Result<ValidDocument> {
    ValidDocument::parse(load(config, path)?)
}
