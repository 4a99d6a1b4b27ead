//! Task runner
//!
//! Runs a single Gradle task through a [`GradleBackend`] and reports the
//! outcome as an [`ExecutionResult`]. A run never errors: spawn failures and
//! non-zero exits both become failed results.

use std::path::Path;
use std::time::Instant;

use gradle_tasks_protocol::ExecutionResult;
use tracing::{info, warn};

use crate::execution::backend::{GradleBackend, ProcessOutput};
use crate::execution::command::GradleCommand;

/// Runs tasks for one project with one Gradle command
pub struct TaskRunner<'a, B: GradleBackend> {
    backend: &'a B,
    command: &'a GradleCommand,
    working_dir: &'a Path,
}

impl<'a, B: GradleBackend> TaskRunner<'a, B> {
    pub fn new(backend: &'a B, command: &'a GradleCommand, working_dir: &'a Path) -> Self {
        Self {
            backend,
            command,
            working_dir,
        }
    }

    /// Run `task_name` and time it
    pub async fn run(&self, task_name: &str) -> ExecutionResult {
        let args = GradleCommand::run_task_args(task_name);
        let rendered = self.command.render(&args);
        info!(command = %rendered, "Running task");

        let started = Instant::now();
        let outcome = self
            .backend
            .invoke(self.command.program(), &args, self.working_dir)
            .await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(output) if output.success() => {
                info!(task = task_name, duration_ms, "Task completed");
                ExecutionResult::success(task_name, duration_ms, output.stdout)
            }
            Ok(output) => {
                let message = failure_message(&rendered, &output);
                warn!(task = task_name, duration_ms, "Task failed: {}", message);
                ExecutionResult::failure(task_name, duration_ms, output.stdout, message)
            }
            Err(e) => {
                warn!(task = task_name, "Task could not be started: {}", e);
                ExecutionResult::failure(task_name, duration_ms, "", e.to_string())
            }
        }
    }
}

fn failure_message(rendered: &str, output: &ProcessOutput) -> String {
    let status = match output.exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    };
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        format!("Command failed ({}): {}", status, rendered)
    } else {
        format!("Command failed ({}): {}\n{}", status, rendered, stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GradleResult, GradleTasksError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedBackend {
        response: Mutex<Option<GradleResult<ProcessOutput>>>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl ScriptedBackend {
        fn new(response: GradleResult<ProcessOutput>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GradleBackend for ScriptedBackend {
        async fn invoke(
            &self,
            _program: &Path,
            args: &[String],
            _working_dir: &Path,
        ) -> GradleResult<ProcessOutput> {
            self.calls.lock().unwrap().push(args.to_vec());
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(ProcessOutput::default()))
        }
    }

    fn exited(code: i32, stdout: &str, stderr: &str) -> GradleResult<ProcessOutput> {
        Ok(ProcessOutput {
            exit_code: Some(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    #[tokio::test]
    async fn successful_run() {
        let backend = ScriptedBackend::new(exited(0, "BUILD SUCCESSFUL", ""));
        let command = GradleCommand::new("gradle");
        let runner = TaskRunner::new(&backend, &command, Path::new("."));

        let result = runner.run("build").await;

        assert_eq!(result.task_name, "build");
        assert!(result.succeeded);
        assert_eq!(result.captured_output, "BUILD SUCCESSFUL");
        assert!(result.failure_message.is_none());
        assert_eq!(
            backend.calls.lock().unwrap().as_slice(),
            &[vec!["build".to_string(), "--console=plain".to_string()]]
        );
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_failed_result() {
        let backend = ScriptedBackend::new(exited(1, "> Task :test FAILED", "BUILD FAILED\n"));
        let command = GradleCommand::new("gradle");
        let runner = TaskRunner::new(&backend, &command, Path::new("."));

        let result = runner.run("test").await;

        assert!(!result.succeeded);
        assert_eq!(result.captured_output, "> Task :test FAILED");
        assert_eq!(
            result.failure_message.as_deref(),
            Some("Command failed (exit code 1): gradle test --console=plain\nBUILD FAILED")
        );
    }

    #[tokio::test]
    async fn spawn_failure_is_a_failed_result() {
        let backend = ScriptedBackend::new(Err(GradleTasksError::Task(
            "Failed to execute command 'gradle': not found".to_string(),
        )));
        let command = GradleCommand::new("gradle");
        let runner = TaskRunner::new(&backend, &command, Path::new("."));

        let result = runner.run("jar").await;

        assert!(!result.succeeded);
        assert!(result.captured_output.is_empty());
        assert!(result
            .failure_message
            .as_deref()
            .unwrap()
            .contains("not found"));
    }

    #[test]
    fn failure_message_without_stderr() {
        let output = ProcessOutput {
            exit_code: None,
            stdout: String::new(),
            stderr: "  \n".to_string(),
        };
        assert_eq!(
            failure_message("gradle jar --console=plain", &output),
            "Command failed (terminated by signal): gradle jar --console=plain"
        );
    }
}
