//! # taskrender
//!
//! Sets one property on one container definition of a task definition and
//! writes the result to a fresh file for later pipeline steps.

mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "{} failed", taskrender_common::constants::APP_NAME);
            output::report_failure(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
