//! Serializable messages exchanged between a host panel and the session.
//!
//! The wire format is one JSON object per message, tagged by a `command`
//! field:
//!
//! ```rust
//! # use gradle_tasks_protocol::PanelRequest;
//! let request: PanelRequest =
//!     serde_json::from_str(r#"{"command":"runTask","taskName":"build"}"#).unwrap();
//! assert_eq!(
//!     request,
//!     PanelRequest::RunTask { task_name: "build".to_string() }
//! );
//! ```
//!
//! A panel starts with [`PanelRequest::Ready`]; the session answers with
//! [`PanelEvent::Loading`] followed by either [`PanelEvent::TasksLoaded`] or
//! [`PanelEvent::Error`].

use serde::{Deserialize, Serialize};

use crate::types::{ExecutionResult, TaskRecord};

/// Messages sent from the panel to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelRequest {
    /// The panel finished loading and wants the initial task list.
    Ready,

    /// Reload the task list from Gradle.
    Refresh,

    /// Run a single task.
    #[serde(rename_all = "camelCase")]
    RunTask { task_name: String },

    /// Fetch Gradle's own help text for a task.
    #[serde(rename_all = "camelCase")]
    GetTaskDetails { task_name: String },
}

/// Messages sent from the session to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelEvent {
    /// A listing refresh started.
    Loading { message: String },

    /// A listing refresh finished with at least one task.
    TasksLoaded { tasks: Vec<TaskRecord> },

    /// A refresh or request failed. `message` is meant for the user.
    Error { message: String },

    /// A task run started.
    #[serde(rename_all = "camelCase")]
    TaskRunning { task_name: String },

    /// A task run finished, successfully or not.
    TaskCompleted { result: ExecutionResult },

    /// Help text for a task.
    #[serde(rename_all = "camelCase")]
    TaskDetails { task_name: String, details: String },
}

impl PanelEvent {
    /// Shorthand for [`PanelEvent::Error`].
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Shorthand for [`PanelEvent::Loading`].
    #[must_use]
    pub fn loading(message: impl Into<String>) -> Self {
        Self::Loading {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requests_parse_from_panel_json() {
        let ready: PanelRequest = serde_json::from_value(json!({ "command": "ready" })).unwrap();
        assert_eq!(ready, PanelRequest::Ready);

        let refresh: PanelRequest =
            serde_json::from_value(json!({ "command": "refresh" })).unwrap();
        assert_eq!(refresh, PanelRequest::Refresh);

        let details: PanelRequest = serde_json::from_value(json!({
            "command": "getTaskDetails",
            "taskName": "app:test"
        }))
        .unwrap();
        assert_eq!(
            details,
            PanelRequest::GetTaskDetails {
                task_name: "app:test".to_string()
            }
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let parsed = serde_json::from_value::<PanelRequest>(json!({ "command": "zoomIn" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn events_serialize_with_command_tag() {
        let running = serde_json::to_value(PanelEvent::TaskRunning {
            task_name: "build".to_string(),
        })
        .unwrap();
        assert_eq!(running, json!({ "command": "taskRunning", "taskName": "build" }));

        let error = serde_json::to_value(PanelEvent::error("No Gradle tasks found.")).unwrap();
        assert_eq!(
            error,
            json!({ "command": "error", "message": "No Gradle tasks found." })
        );

        let loaded = serde_json::to_value(PanelEvent::TasksLoaded {
            tasks: vec![TaskRecord::new("clean", "Deletes the build directory.", "Build")],
        })
        .unwrap();
        assert_eq!(loaded["command"], "tasksLoaded");
        assert_eq!(loaded["tasks"][0]["name"], "clean");
    }

    #[test]
    fn task_completed_wraps_result() {
        let result = ExecutionResult::success("jar", 42, "BUILD SUCCESSFUL");
        let value = serde_json::to_value(PanelEvent::TaskCompleted { result }).unwrap();
        assert_eq!(value["command"], "taskCompleted");
        assert_eq!(value["result"]["taskName"], "jar");
        assert_eq!(value["result"]["succeeded"], true);
    }
}
