use std::io::{self, Write};

use anyhow::Result;
use colored::*;
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::session::GradleSession;
use gradle_tasks_core::tasks::TaskStatus;
use gradle_tasks_core::ExecutionResult;

pub async fn execute<B: GradleBackend>(session: &mut GradleSession<B>, task: &str) -> Result<()> {
    println!(
        "{} {} {}",
        TaskStatus::Running.symbol(),
        "Running task".bold(),
        task.cyan()
    );
    println!();

    let result = session
        .run_task(task)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run task: {}", e))?;

    render_result(&mut io::stdout().lock(), &result)?;

    if !result.succeeded {
        anyhow::bail!("Task '{}' failed", task);
    }
    Ok(())
}

/// Captured output followed by a one-line summary
pub fn render_result(out: &mut impl Write, result: &ExecutionResult) -> io::Result<()> {
    if !result.captured_output.is_empty() {
        write!(out, "{}", result.captured_output)?;
        if !result.captured_output.ends_with('\n') {
            writeln!(out)?;
        }
        writeln!(out)?;
    }

    if result.succeeded {
        writeln!(
            out,
            "{} {}",
            "✓".green().bold(),
            format!(
                "Task \"{}\" completed successfully in {}",
                result.task_name,
                result.duration_display()
            )
            .green()
            .bold()
        )
    } else {
        writeln!(
            out,
            "{} {}",
            "✗".red().bold(),
            format!(
                "Task \"{}\" failed: {}",
                result.task_name,
                result.failure_message.as_deref().unwrap_or("unknown error")
            )
            .red()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &ExecutionResult) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn success_summary() {
        let output = render(&ExecutionResult::success("build", 1500, "BUILD SUCCESSFUL"));
        assert_eq!(
            output,
            "BUILD SUCCESSFUL\n\n✓ Task \"build\" completed successfully in 1.50s\n"
        );
    }

    #[test]
    fn failure_summary() {
        let output = render(&ExecutionResult::failure(
            "test",
            10,
            "",
            "Command failed (exit code 1): gradle test --console=plain",
        ));
        assert_eq!(
            output,
            "✗ Task \"test\" failed: Command failed (exit code 1): gradle test --console=plain\n"
        );
    }
}
