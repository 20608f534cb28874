//! Writing rendered task definitions to fresh files.
//!
//! The document is written to a named temporary file that is only persisted
//! once the whole payload is on disk, so a failed write leaves nothing behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use taskrender_common::constants::{RENDERED_FILE_PREFIX, RENDERED_FILE_SUFFIX};
use taskrender_common::error::{RenderError, Result};

use crate::document::ValidDocument;

/// Serializes a JSON value with 2-space indentation and no trailing newline.
///
/// # Errors
///
/// Returns `Serialization` if the value cannot be serialized.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `document` to a new `task-definition-*.json` file in `dir`.
///
/// Returns the path of the written file, which is kept on disk.
///
/// # Errors
///
/// Returns `Io` if the file cannot be created, written, or persisted.
pub fn write_document(document: ValidDocument, dir: &Path) -> Result<PathBuf> {
    let payload = to_pretty_json(&document.into_value())?;

    let mut file = tempfile::Builder::new()
        .prefix(RENDERED_FILE_PREFIX)
        .suffix(RENDERED_FILE_SUFFIX)
        .tempfile_in(dir)
        .map_err(|source| RenderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    file.write_all(payload.as_bytes())
        .map_err(|source| RenderError::Io {
            path: file.path().to_path_buf(),
            source,
        })?;

    let (_, path) = file.keep().map_err(|err| RenderError::Io {
        path: err.file.path().to_path_buf(),
        source: err.error,
    })?;

    tracing::info!(path = %path.display(), bytes = payload.len(), "wrote rendered task definition");
    Ok(path)
}
