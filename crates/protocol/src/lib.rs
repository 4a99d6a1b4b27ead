//! # Gradle Tasks Protocol
//!
//! Shared data model for gradle-tasks and the message vocabulary spoken between
//! a host panel (an editor webview, a terminal UI, a test harness) and the
//! session that drives Gradle.
//!
//! - [`TaskRecord`] - One row of Gradle's task listing, annotated with inferred dependencies
//! - [`ExecutionResult`] - The outcome of running a single task
//! - [`PanelRequest`] - Messages a panel sends to the session
//! - [`PanelEvent`] - Messages the session sends back to the panel
//!
//! Every type serializes to camelCase JSON so a JavaScript panel can consume it
//! without a mapping layer.

pub mod message;
pub mod types;

pub use message::{PanelEvent, PanelRequest};
pub use types::{ExecutionResult, TaskRecord, DEFAULT_GROUP};
