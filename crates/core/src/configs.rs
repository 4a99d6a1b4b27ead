//! Configuration parsing for gradle-tasks
//!
//! - [`gradle`] - The optional `.gradle-tasks.yml` project file

pub mod gradle;

pub use gradle::{config_schema, load_config, parse_gradle_tasks_config, GradleTasksConfig};
