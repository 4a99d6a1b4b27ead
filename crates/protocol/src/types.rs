//! Core data types shared by the lister, the dependency inferrer and any panel.
//!
//! - [`TaskRecord`] - A task as it appears in one listing snapshot
//! - [`ExecutionResult`] - The outcome of one task run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group assigned to tasks that appear before any group header, or that were
/// recovered by the fallback scan.
pub const DEFAULT_GROUP: &str = "Other";

/// One row of Gradle's `tasks --all` listing.
///
/// Records are rebuilt from scratch on every refresh. The only state carried
/// from one refresh to the next is [`TaskRecord::last_result`], which is looked
/// up by name in the session's result cache.
///
/// ```rust
/// # use gradle_tasks_protocol::TaskRecord;
/// let task = TaskRecord::new("build", "Assembles and tests this project.", "Build");
/// assert!(task.dependencies.is_empty());
/// assert!(task.last_result.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier, unique within a single listing snapshot.
    ///
    /// Starts with a letter followed by letters, digits, `:`, `_` or `-`.
    /// Project-qualified names such as `app:test` are valid.
    pub name: String,

    /// Free-text description from the listing. Empty when Gradle printed none.
    pub description: String,

    /// Display category the listing filed this task under.
    pub group: String,

    /// Heuristically inferred task names this task "depends on".
    ///
    /// Best-effort hints only, never Gradle's real task graph. Never contains
    /// the task's own name.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Most recent run of a task with this name in the current session.
    #[serde(default)]
    pub last_result: Option<ExecutionResult>,
}

impl TaskRecord {
    /// Create a record with no dependencies and no previous result.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            group: group.into(),
            dependencies: Vec::new(),
            last_result: None,
        }
    }

    /// Whether the last recorded run of this task succeeded.
    ///
    /// `None` when the task has not been run in this session.
    #[must_use]
    pub fn last_succeeded(&self) -> Option<bool> {
        self.last_result.as_ref().map(|result| result.succeeded)
    }
}

/// Outcome of running one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Name of the task that was run.
    pub task_name: String,

    /// `true` when Gradle exited with status zero.
    pub succeeded: bool,

    /// Wall-clock duration of the Gradle invocation in milliseconds.
    pub duration_ms: u64,

    /// Everything Gradle wrote to stdout. May be empty.
    pub captured_output: String,

    /// Why the run failed. Only present when `succeeded` is `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}

impl ExecutionResult {
    /// Build a successful result.
    #[must_use]
    pub fn success(
        task_name: impl Into<String>,
        duration_ms: u64,
        captured_output: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            succeeded: true,
            duration_ms,
            captured_output: captured_output.into(),
            failure_message: None,
            completed_at: Utc::now(),
        }
    }

    /// Build a failed result carrying `failure_message`.
    #[must_use]
    pub fn failure(
        task_name: impl Into<String>,
        duration_ms: u64,
        captured_output: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            succeeded: false,
            duration_ms,
            captured_output: captured_output.into(),
            failure_message: Some(failure_message.into()),
            completed_at: Utc::now(),
        }
    }

    /// Duration in seconds with two decimals, e.g. `"1.23s"`.
    #[must_use]
    pub fn duration_display(&self) -> String {
        format!("{:.2}s", self.duration_ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_record_serializes_camel_case() {
        let mut task = TaskRecord::new("compileJava", "Compiles main Java source.", "Build");
        task.last_result = Some(ExecutionResult::success("compileJava", 1200, "BUILD SUCCESSFUL"));

        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["name"], "compileJava");
        assert_eq!(value["group"], "Build");
        assert!(value["dependencies"].as_array().unwrap().is_empty());
        assert_eq!(value["lastResult"]["taskName"], "compileJava");
        assert_eq!(value["lastResult"]["durationMs"], 1200);
        assert_eq!(value["lastResult"]["capturedOutput"], "BUILD SUCCESSFUL");
        assert!(value["lastResult"].get("failureMessage").is_none());
        assert!(value["lastResult"].get("completedAt").is_some());
    }

    #[test]
    fn failure_carries_message_only_when_failed() {
        let failed = ExecutionResult::failure("test", 10, "", "Command failed: gradle test");
        assert!(!failed.succeeded);
        assert_eq!(
            failed.failure_message.as_deref(),
            Some("Command failed: gradle test")
        );

        let ok = ExecutionResult::success("test", 10, "");
        assert!(ok.succeeded);
        assert!(ok.failure_message.is_none());
    }

    #[test]
    fn duration_display_uses_two_decimals() {
        let result = ExecutionResult::success("jar", 1234, "");
        assert_eq!(result.duration_display(), "1.23s");

        let instant = ExecutionResult::success("jar", 0, "");
        assert_eq!(instant.duration_display(), "0.00s");
    }

    #[test]
    fn last_succeeded_reflects_result() {
        let mut task = TaskRecord::new("check", "", "Verification");
        assert_eq!(task.last_succeeded(), None);

        task.last_result = Some(ExecutionResult::failure("check", 5, "", "boom"));
        assert_eq!(task.last_succeeded(), Some(false));
    }
}
