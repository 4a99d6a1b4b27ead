//! High-level Gradle session interface
//!
//! This module provides the [`GradleSession`] which serves as the primary
//! interface for a panel or CLI. A session owns everything that lives between
//! refreshes:
//! - The resolved Gradle command (wrapper or configured executable)
//! - The dependency rule table
//! - The [`ResultCache`] of task runs, which is dropped with the session
//!
//! ## Example
//!
//! ```rust,no_run
//! use gradle_tasks_core::session::{GradleSession, SessionConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> gradle_tasks_core::types::GradleResult<()> {
//! let mut session = GradleSession::new(SessionConfig {
//!     project_root: PathBuf::from("."),
//!     ..Default::default()
//! })?;
//!
//! let listing = session.load_tasks().await?;
//! let result = session.run_task("build").await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use gradle_tasks_protocol::{ExecutionResult, TaskRecord};
use tracing::{info, warn};

use crate::configs::load_config;
use crate::dependencies::{build_dependency_graph, RuleTable};
use crate::execution::{
    resolve_gradle_command, GradleBackend, GradleCommand, ProcessBackend, TaskRunner,
};
use crate::listing::{is_valid_task_name, parse_task_listing};
use crate::results::{DependencyGraphResult, ResultCache, TaskListResult};
use crate::types::{GradleResult, GradleTasksError};

/// Characters of Gradle output quoted when no tasks could be parsed
const PREVIEW_CHARS: usize = 500;

/// Configuration for opening a session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub project_root: PathBuf,
    /// Overrides `gradleCommand` from the config file
    pub gradle_command: Option<String>,
    /// Overrides `gradleWrapper` from the config file
    pub use_wrapper: Option<bool>,
}

/// A Gradle project plus the state kept across refreshes
pub struct GradleSession<B: GradleBackend = ProcessBackend> {
    project_root: PathBuf,
    command: GradleCommand,
    rules: RuleTable,
    backend: B,
    results: ResultCache,
}

impl GradleSession<ProcessBackend> {
    /// Open a session on a project directory, reading `.gradle-tasks.yml` if present
    pub fn new(config: SessionConfig) -> GradleResult<Self> {
        let project_root = config.project_root.canonicalize().map_err(|e| {
            GradleTasksError::Config(format!(
                "Project directory {} is not accessible: {}",
                config.project_root.display(),
                e
            ))
        })?;

        let file_config =
            load_config(&project_root)?.with_overrides(config.gradle_command, config.use_wrapper);
        let command = resolve_gradle_command(&project_root, &file_config);

        Ok(Self::with_backend(
            project_root,
            command,
            file_config.rules(),
            ProcessBackend,
        ))
    }
}

impl<B: GradleBackend> GradleSession<B> {
    pub fn with_backend(
        project_root: PathBuf,
        command: GradleCommand,
        rules: RuleTable,
        backend: B,
    ) -> Self {
        Self {
            project_root,
            command,
            rules,
            backend,
            results: ResultCache::new(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn command(&self) -> &GradleCommand {
        &self.command
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn results(&self) -> &ResultCache {
        &self.results
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// List tasks, annotate inferred dependencies and merge in previous results
    pub async fn load_tasks(&self) -> GradleResult<TaskListResult> {
        let args = GradleCommand::list_tasks_args();
        let rendered = self.command.render(&args);
        info!(command = %rendered, working_dir = %self.project_root.display(), "Loading tasks");

        let output = self
            .backend
            .invoke(self.command.program(), &args, &self.project_root)
            .await?;

        if !output.success() {
            let stderr = output.stderr.trim();
            let stderr = if stderr.is_empty() {
                match output.exit_code {
                    Some(code) => format!("Command exited with code {}", code),
                    None => "Command was terminated by a signal".to_string(),
                }
            } else {
                stderr.to_string()
            };
            return Err(GradleTasksError::Process {
                command: rendered,
                working_dir: self.project_root.clone(),
                exit_code: output.exit_code,
                stderr,
            });
        }

        let tasks = parse_task_listing(&output.stdout, &self.results);
        if tasks.is_empty() {
            warn!(output_len = output.stdout.len(), "No tasks found in Gradle output");
            return Err(GradleTasksError::NoTasksFound {
                command: rendered,
                working_dir: self.project_root.clone(),
                preview: output.stdout.chars().take(PREVIEW_CHARS).collect(),
            });
        }

        info!(count = tasks.len(), "Loaded tasks");
        Ok(TaskListResult {
            tasks: self.rules.annotate(tasks),
            command: rendered,
            working_dir: self.project_root.clone(),
        })
    }

    /// Run one task and remember its result for later refreshes
    pub async fn run_task(&mut self, task_name: &str) -> GradleResult<ExecutionResult> {
        Self::check_task_name(task_name)?;

        let runner = TaskRunner::new(&self.backend, &self.command, &self.project_root);
        let result = runner.run(task_name).await;
        self.results.record(result.clone());
        Ok(result)
    }

    /// Gradle's own help text for a task, whatever the exit status
    pub async fn task_details(&self, task_name: &str) -> GradleResult<String> {
        Self::check_task_name(task_name)?;

        let args = GradleCommand::task_help_args(task_name);
        let output = self
            .backend
            .invoke(self.command.program(), &args, &self.project_root)
            .await?;
        Ok(output.stdout)
    }

    /// Dependency graph of an annotated listing
    pub fn dependency_graph(&self, tasks: &[TaskRecord]) -> DependencyGraphResult {
        build_dependency_graph(tasks)
    }

    fn check_task_name(task_name: &str) -> GradleResult<()> {
        if is_valid_task_name(task_name) {
            Ok(())
        } else {
            Err(GradleTasksError::Task(format!(
                "'{}' is not a valid task name",
                task_name
            )))
        }
    }
}
