//! `taskrender render` — Set a container property and write a new task definition.

use std::path::PathBuf;

use clap::Args;
use taskrender_common::config::RenderConfig;
use taskrender_common::constants::{
    CONTAINER_NAME_INPUT_ENV, PROPERTY_NAME_INPUT_ENV, TASK_DEFINITION_INPUT_ENV,
    TASK_DEFINITION_OUTPUT, VALUE_INPUT_ENV,
};
use taskrender_core::{PropertyUpdate, apply, sink, source};

use crate::output;

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the task definition JSON file.
    #[arg(long, env = TASK_DEFINITION_INPUT_ENV)]
    pub task_definition: String,

    /// Name of the container definition to update.
    #[arg(long, env = CONTAINER_NAME_INPUT_ENV)]
    pub container_name: String,

    /// Property to set on the container definition.
    #[arg(long, env = PROPERTY_NAME_INPUT_ENV)]
    pub property_name: String,

    /// New value; parsed as JSON, otherwise used as a plain string.
    #[arg(long, env = VALUE_INPUT_ENV, default_value = "", allow_hyphen_values = true)]
    pub value: String,
}

impl RenderArgs {
    /// Builds the property update, trimming surrounding whitespace from
    /// every input.
    #[must_use]
    pub fn update(&self) -> PropertyUpdate {
        PropertyUpdate::new(
            self.container_name.trim(),
            self.property_name.trim(),
            self.value.trim(),
        )
    }
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if the task definition cannot be loaded, validated,
/// rendered, or written, or if the output cannot be reported.
pub fn execute(args: &RenderArgs, config: &RenderConfig) -> anyhow::Result<()> {
    let path = render(args, config)?;
    output::set_output(config, TASK_DEFINITION_OUTPUT, &path.to_string_lossy())
}

/// Loads, renders, and writes the task definition, returning the new file path.
///
/// # Errors
///
/// Returns the underlying render error unchanged.
pub fn render(args: &RenderArgs, config: &RenderConfig) -> anyhow::Result<PathBuf> {
    let update = args.update();
    tracing::info!(
        path = %args.task_definition.trim(),
        container = %update.container_name,
        property = %update.property_name,
        "rendering task definition"
    );

    let document = source::load_document(config, args.task_definition.trim())?;
    let rendered = apply(document, &update)?;
    Ok(sink::write_document(rendered, &config.temp_dir)?)
}
