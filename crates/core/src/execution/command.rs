//! Gradle command resolution
//!
//! Decides between the project's `gradlew` wrapper and a configured command,
//! and builds the fixed argument lists used for listing, running and
//! describing tasks.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::configs::GradleTasksConfig;

#[cfg(windows)]
const WRAPPER_NAME: &str = "gradlew.bat";
#[cfg(not(windows))]
const WRAPPER_NAME: &str = "gradlew";

/// The executable used for every Gradle invocation in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleCommand {
    program: PathBuf,
    is_wrapper: bool,
}

impl GradleCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            is_wrapper: false,
        }
    }

    fn wrapper(path: PathBuf) -> Self {
        Self {
            program: path,
            is_wrapper: true,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn is_wrapper(&self) -> bool {
        self.is_wrapper
    }

    /// Arguments for the full plain-text task listing
    pub fn list_tasks_args() -> Vec<String> {
        vec![
            "tasks".to_string(),
            "--all".to_string(),
            "--console=plain".to_string(),
        ]
    }

    /// Arguments for running one task
    pub fn run_task_args(task_name: &str) -> Vec<String> {
        vec![task_name.to_string(), "--console=plain".to_string()]
    }

    /// Arguments for Gradle's help text about one task
    pub fn task_help_args(task_name: &str) -> Vec<String> {
        vec![
            "help".to_string(),
            "--task".to_string(),
            task_name.to_string(),
        ]
    }

    /// Human-readable command line for messages and logs
    pub fn render(&self, args: &[String]) -> String {
        let mut rendered = self.program.display().to_string();
        for arg in args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }
}

impl fmt::Display for GradleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())
    }
}

/// Pick the Gradle executable for `project_root`.
///
/// With the wrapper enabled and `gradlew` present in the project root, the
/// wrapper's absolute path wins (on Unix it is made executable first).
/// Otherwise the configured command is used as-is and looked up on `PATH`.
pub fn resolve_gradle_command(project_root: &Path, config: &GradleTasksConfig) -> GradleCommand {
    if config.use_wrapper() {
        let wrapper_path = project_root.join(WRAPPER_NAME);
        if wrapper_path.is_file() {
            ensure_executable(&wrapper_path);
            debug!(wrapper = %wrapper_path.display(), "Using Gradle wrapper");
            return GradleCommand::wrapper(wrapper_path);
        }
    }

    GradleCommand::new(config.gradle_command())
}

#[cfg(unix)]
fn ensure_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)) {
        tracing::warn!(
            "Could not set executable permission on {}: {}",
            path.display(),
            e
        );
    }
}

#[cfg(not(unix))]
fn ensure_executable(_path: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_wrapper_when_present() {
        let temp_dir = tempfile::tempdir().unwrap();
        let wrapper = temp_dir.path().join(WRAPPER_NAME);
        std::fs::write(&wrapper, "#!/bin/sh\n").unwrap();

        let command = resolve_gradle_command(temp_dir.path(), &GradleTasksConfig::default());

        assert!(command.is_wrapper());
        assert_eq!(command.program(), wrapper.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn wrapper_is_made_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let wrapper = temp_dir.path().join(WRAPPER_NAME);
        std::fs::write(&wrapper, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&wrapper, std::fs::Permissions::from_mode(0o644)).unwrap();

        resolve_gradle_command(temp_dir.path(), &GradleTasksConfig::default());

        let mode = std::fs::metadata(&wrapper).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn falls_back_to_configured_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = GradleTasksConfig::default().with_overrides(Some("gradle8".to_string()), None);

        let command = resolve_gradle_command(temp_dir.path(), &config);

        assert!(!command.is_wrapper());
        assert_eq!(command.program(), Path::new("gradle8"));
    }

    #[test]
    fn wrapper_ignored_when_disabled() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(WRAPPER_NAME), "#!/bin/sh\n").unwrap();
        let config = GradleTasksConfig::default().with_overrides(None, Some(false));

        let command = resolve_gradle_command(temp_dir.path(), &config);

        assert!(!command.is_wrapper());
        assert_eq!(command.program(), Path::new("gradle"));
    }

    #[test]
    fn renders_command_lines() {
        let command = GradleCommand::new("gradle");
        assert_eq!(
            command.render(&GradleCommand::list_tasks_args()),
            "gradle tasks --all --console=plain"
        );
        assert_eq!(
            command.render(&GradleCommand::run_task_args("build")),
            "gradle build --console=plain"
        );
        assert_eq!(
            command.render(&GradleCommand::task_help_args("test")),
            "gradle help --task test"
        );
    }
}
