//! Document keys, pipeline names, and default locations.

/// Top-level key holding the container definition array.
pub const CONTAINER_DEFINITIONS_KEY: &str = "containerDefinitions";

/// Key used to look up a container definition.
pub const CONTAINER_NAME_KEY: &str = "name";

/// Name of the result reporting the rendered file path.
pub const TASK_DEFINITION_OUTPUT: &str = "task-definition";

/// File name prefix of rendered task definitions.
pub const RENDERED_FILE_PREFIX: &str = "task-definition-";

/// File name suffix of rendered task definitions.
pub const RENDERED_FILE_SUFFIX: &str = ".json";

/// Workspace root that relative task definition paths resolve against.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Runner scratch directory receiving rendered files.
pub const TEMP_DIR_ENV: &str = "RUNNER_TEMP";

/// File collecting `name=value` results for later pipeline steps.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Input variable: path to the task definition file.
pub const TASK_DEFINITION_INPUT_ENV: &str = "INPUT_TASK-DEFINITION";

/// Input variable: container to update.
pub const CONTAINER_NAME_INPUT_ENV: &str = "INPUT_CONTAINER-NAME";

/// Input variable: property to set.
pub const PROPERTY_NAME_INPUT_ENV: &str = "INPUT_PROPERTY-NAME";

/// Input variable: raw property value.
pub const VALUE_INPUT_ENV: &str = "INPUT_VALUE";

/// Application name used in log output.
pub const APP_NAME: &str = "taskrender";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "taskrender";
