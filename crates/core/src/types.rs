use std::path::PathBuf;

use thiserror::Error;

/// The main error type for gradle-tasks operations
#[derive(Debug, Error)]
pub enum GradleTasksError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Failed to load tasks: {stderr}\n\nCommand: {command}\nWorking directory: {}",
        .working_dir.display()
    )]
    Process {
        command: String,
        working_dir: PathBuf,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error(
        "No Gradle tasks found. Make sure you are in a Gradle project.\n\nCommand: {command}\nWorking directory: {}\n\nOutput preview:\n{preview}...",
        .working_dir.display()
    )]
    NoTasksFound {
        command: String,
        working_dir: PathBuf,
        preview: String,
    },

    #[error("Task error: {0}")]
    Task(String),
}

/// Result type alias for gradle-tasks operations
pub type GradleResult<T> = Result<T, GradleTasksError>;
