//! The process boundary between a session and Gradle
//!
//! Every Gradle call is one request/response through [`GradleBackend`]. A
//! process that starts and exits, whatever its status, is an `Ok`; only a
//! failure to spawn or collect it is an `Err`.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;

use crate::types::{GradleResult, GradleTasksError};

/// Captured outcome of one Gradle invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[async_trait]
pub trait GradleBackend: Send + Sync {
    /// Run `program` with `args` in `working_dir` and wait for it to exit.
    ///
    /// There is no timeout; a hung Gradle daemon hangs the caller.
    async fn invoke(
        &self,
        program: &Path,
        args: &[String],
        working_dir: &Path,
    ) -> GradleResult<ProcessOutput>;
}

/// Runs Gradle as a child process with stdout and stderr captured
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessBackend;

#[async_trait]
impl GradleBackend for ProcessBackend {
    async fn invoke(
        &self,
        program: &Path,
        args: &[String],
        working_dir: &Path,
    ) -> GradleResult<ProcessOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                GradleTasksError::Task(format!(
                    "Failed to execute command '{}': {}",
                    program.display(),
                    e
                ))
            })?;

        debug!(
            program = %program.display(),
            exit_code = ?output.status.code(),
            stdout_len = output.stdout.len(),
            "Gradle process exited"
        );

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_output_and_exit_code() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = vec![
            "-c".to_string(),
            "echo listing; echo oops >&2; exit 3".to_string(),
        ];

        let output = ProcessBackend
            .invoke(Path::new("sh"), &args, temp_dir.path())
            .await
            .unwrap();

        assert_eq!(output.exit_code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout, "listing\n");
        assert_eq!(output.stderr, "oops\n");
    }

    #[tokio::test]
    async fn runs_in_working_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "here").unwrap();

        let output = ProcessBackend
            .invoke(Path::new("cat"), &["marker.txt".to_string()], temp_dir.path())
            .await
            .unwrap();

        assert!(output.success());
        assert_eq!(output.stdout, "here");
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = ProcessBackend
            .invoke(
                Path::new("definitely-not-a-gradle-binary"),
                &[],
                temp_dir.path(),
            )
            .await;

        assert!(matches!(result, Err(GradleTasksError::Task(_))));
    }
}
