//! Gradle Tasks Core Library
//!
//! This is the core library for gradle-tasks. It turns Gradle's plain-text task
//! listing into structured records, guesses coarse task dependencies from task
//! names, and runs tasks while remembering their results for the lifetime of a
//! session.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`session`] - High-level session interface used by the CLI and panel relay
//! - [`listing`] - Best-effort parser for `gradle tasks --all` output
//! - [`dependencies`] - Substring rule table for heuristic dependencies
//! - [`execution`] - Gradle command resolution, process backend and task runner
//! - [`results`] - Session result cache and output types
//! - [`configs`] - Optional `.gradle-tasks.yml` project configuration
//! - [`tasks`] - Status and color helpers for terminal output
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The parser and the rule table are pure and can be used on captured text:
//!
//! ```rust
//! use gradle_tasks_core::dependencies::annotate_dependencies;
//! use gradle_tasks_core::listing::parse_task_listing;
//! use gradle_tasks_core::results::ResultCache;
//!
//! let output = "\
//! Tasks runnable from root project 'demo'
//!
//! Build tasks
//! -----------
//! build - Assembles and tests this project.
//! clean - Deletes the build directory.
//!
//! Verification tasks
//! ------------------
//! test - Runs the test suite.
//! ";
//!
//! let tasks = annotate_dependencies(parse_task_listing(output, &ResultCache::new()));
//! assert_eq!(tasks[0].name, "build");
//! assert_eq!(tasks[0].dependencies, vec!["test".to_string()]);
//! ```

pub mod configs;
pub mod dependencies;
pub mod execution;
pub mod listing;
pub mod results;
pub mod session;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use gradle_tasks_protocol::{ExecutionResult, PanelEvent, PanelRequest, TaskRecord};
pub use session::{GradleSession, SessionConfig};
pub use types::{GradleResult, GradleTasksError};
