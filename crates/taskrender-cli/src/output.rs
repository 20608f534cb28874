//! Reporting results and failures back to the invoking pipeline.
//!
//! Named results go to the pipeline output file as `name=value` lines, or to
//! stdout when no output file is configured. Failures are printed as
//! `::error::` annotations.

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Context;
use taskrender_common::config::RenderConfig;

/// Formats a named result line.
#[must_use]
pub fn output_line(name: &str, value: &str) -> String {
    format!("{name}={value}")
}

/// Reports a named result to the pipeline.
///
/// # Errors
///
/// Returns an error if the output file cannot be opened or appended to.
pub fn set_output(config: &RenderConfig, name: &str, value: &str) -> anyhow::Result<()> {
    let line = output_line(name, value);
    match &config.output_file {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open output file {}", path.display()))?;
            writeln!(file, "{line}")
                .with_context(|| format!("failed to write output file {}", path.display()))?;
        }
        None => println!("{line}"),
    }
    tracing::debug!(name, value, "reported output");
    Ok(())
}

/// Formats a failure message as a pipeline error annotation.
#[must_use]
pub fn failure_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

/// Prints a failure annotation to stdout.
pub fn report_failure(message: &str) {
    println!("{}", failure_annotation(message));
}
