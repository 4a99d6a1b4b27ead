use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dependencies::RuleTable;
use crate::types::{GradleResult, GradleTasksError};

/// Name of the optional configuration file in the project root
pub const CONFIG_FILE_NAME: &str = ".gradle-tasks.yml";

/// Command used when no wrapper is found and none is configured
pub const DEFAULT_GRADLE_COMMAND: &str = "gradle";

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GradleTasksConfig {
    /// Use the project's `gradlew` wrapper when it exists. Defaults to true.
    pub gradle_wrapper: Option<bool>,
    /// Command to run when the wrapper is disabled or missing. Defaults to `gradle`.
    pub gradle_command: Option<String>,
    /// Replaces the built-in dependency heuristic table when set.
    pub dependency_rules: Option<RuleTable>,
}

impl GradleTasksConfig {
    pub fn use_wrapper(&self) -> bool {
        self.gradle_wrapper.unwrap_or(true)
    }

    pub fn gradle_command(&self) -> &str {
        self.gradle_command
            .as_deref()
            .unwrap_or(DEFAULT_GRADLE_COMMAND)
    }

    pub fn rules(&self) -> RuleTable {
        self.dependency_rules.clone().unwrap_or_default()
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, gradle_command: Option<String>, use_wrapper: Option<bool>) -> Self {
        if gradle_command.is_some() {
            self.gradle_command = gradle_command;
        }
        if use_wrapper.is_some() {
            self.gradle_wrapper = use_wrapper;
        }
        self
    }
}

pub fn parse_gradle_tasks_config(yaml_str: &str) -> GradleResult<GradleTasksConfig> {
    if yaml_str.trim().is_empty() {
        return Ok(GradleTasksConfig::default());
    }
    let config: GradleTasksConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Load `.gradle-tasks.yml` from `project_root`, or defaults when it is absent
pub fn load_config(project_root: &Path) -> GradleResult<GradleTasksConfig> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(GradleTasksConfig::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        GradleTasksError::Config(format!(
            "Failed to read config {}: {}",
            config_path.display(),
            e
        ))
    })?;

    parse_gradle_tasks_config(&content).map_err(|e| {
        GradleTasksError::Config(format!(
            "Failed to parse config {}: {}",
            config_path.display(),
            e
        ))
    })
}

/// JSON schema of the configuration file, pretty-printed
pub fn config_schema() -> GradleResult<String> {
    let schema = schemars::schema_for!(GradleTasksConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
