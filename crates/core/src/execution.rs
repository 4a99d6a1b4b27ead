//! Gradle process execution
//!
//! This module resolves which Gradle executable to use, runs it behind the
//! [`GradleBackend`] seam, and turns task runs into
//! [`ExecutionResult`](gradle_tasks_protocol::ExecutionResult)s.

pub mod backend;
pub mod command;
pub mod runner;

pub use backend::{GradleBackend, ProcessBackend, ProcessOutput};
pub use command::{resolve_gradle_command, GradleCommand};
pub use runner::TaskRunner;
