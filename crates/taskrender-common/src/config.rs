//! Runtime configuration for a render invocation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{OUTPUT_FILE_ENV, TEMP_DIR_ENV, WORKSPACE_ENV};

/// Locations a render invocation reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Base directory for relative task definition paths.
    pub workspace_dir: PathBuf,
    /// Directory receiving the rendered task definition.
    pub temp_dir: PathBuf,
    /// Pipeline output file for named results, if any.
    pub output_file: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            temp_dir: std::env::temp_dir(),
            output_file: None,
        }
    }
}

impl RenderConfig {
    /// Builds a configuration from the pipeline environment variables,
    /// falling back to defaults for any that are unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let get = |key: &str| lookup(key).filter(|p| !p.as_os_str().is_empty());
        let defaults = Self::default();
        Self {
            workspace_dir: get(WORKSPACE_ENV).unwrap_or(defaults.workspace_dir),
            temp_dir: get(TEMP_DIR_ENV).unwrap_or(defaults.temp_dir),
            output_file: get(OUTPUT_FILE_ENV),
        }
    }

    /// Resolves a task definition path: absolute paths are returned as-is,
    /// relative ones are joined onto the workspace directory.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.workspace_dir.join(candidate)
        }
    }
}
