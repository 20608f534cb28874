//! `taskrender validate` — Check the shape of a task definition.

use clap::Args;
use taskrender_common::config::RenderConfig;
use taskrender_common::constants::TASK_DEFINITION_INPUT_ENV;
use taskrender_core::source;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the task definition JSON file.
    #[arg(long, env = TASK_DEFINITION_INPUT_ENV)]
    pub task_definition: String,
}

/// Executes the `validate` command.
///
/// # Errors
///
/// Returns an error if the file is missing, is not JSON, or has no
/// `containerDefinitions` array.
pub fn execute(args: &ValidateArgs, config: &RenderConfig) -> anyhow::Result<()> {
    let path = args.task_definition.trim();
    let document = source::load_document(config, path)?;
    let count = document.containers().len();
    tracing::info!(path, containers = count, "task definition is valid");
    println!("{path}: {count} container definition(s)");
    Ok(())
}
