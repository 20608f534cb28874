//! CLI command definitions and dispatch.

pub mod render;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskrender_common::config::RenderConfig;
use taskrender_common::constants::BIN_NAME;

/// taskrender — Set one container property in a task definition.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Directory relative task definition paths resolve against
    /// (defaults to $GITHUB_WORKSPACE, then the current directory).
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Directory receiving the rendered file (defaults to $RUNNER_TEMP).
    #[arg(long, global = true)]
    pub temp_dir: Option<PathBuf>,

    /// File collecting named results (defaults to $GITHUB_OUTPUT).
    #[arg(long, global = true)]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the runtime configuration: pipeline environment first,
    /// explicit flags on top.
    #[must_use]
    pub fn config(&self) -> RenderConfig {
        let mut config = RenderConfig::from_env();
        if let Some(dir) = &self.workspace {
            config.workspace_dir.clone_from(dir);
        }
        if let Some(dir) = &self.temp_dir {
            config.temp_dir.clone_from(dir);
        }
        if let Some(file) = &self.output_file {
            config.output_file = Some(file.clone());
        }
        config
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set a container property and write the result to a new file.
    Render(render::RenderArgs),
    /// Check that a task definition has a containerDefinitions array.
    Validate(validate::ValidateArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    tracing::debug!(?config, "resolved configuration");
    match cli.command {
        Command::Render(args) => render::execute(&args, &config),
        Command::Validate(args) => validate::execute(&args, &config),
    }
}
