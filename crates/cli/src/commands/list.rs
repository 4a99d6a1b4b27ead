use std::io::{self, Write};

use anyhow::Result;
use colored::*;
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::results::group_tasks;
use gradle_tasks_core::session::GradleSession;
use gradle_tasks_core::tasks::{get_group_color, TaskStatus};
use gradle_tasks_core::TaskRecord;

pub async fn execute<B: GradleBackend>(session: &GradleSession<B>, json: bool) -> Result<()> {
    let listing = session
        .load_tasks()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &listing.tasks)?;
        writeln!(stdout)?;
    } else {
        render_task_list(&mut stdout, &listing.tasks)?;
    }

    Ok(())
}

/// Groups sorted by name, each task with status, description and inferred dependencies
pub fn render_task_list(out: &mut impl Write, tasks: &[TaskRecord]) -> io::Result<()> {
    if tasks.is_empty() {
        writeln!(out, "  {}", "No tasks found".dimmed())?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!("{} tasks loaded", tasks.len()).bold().underline()
    )?;

    for group in group_tasks(tasks) {
        writeln!(out)?;
        writeln!(out, "{}", group.name.color(get_group_color(&group.name)).bold())?;

        for task in &group.tasks {
            let mut line = format!("  {} {}", TaskStatus::of(task).symbol(), task.name.bold());
            if let Some(result) = &task.last_result {
                line.push_str(&format!(" {}", result.duration_display().dimmed()));
            }
            if !task.description.is_empty() {
                line.push_str(&format!("  {}", task.description));
            }
            writeln!(out, "{}", line)?;

            if !task.dependencies.is_empty() {
                writeln!(
                    out,
                    "      {} {}",
                    "depends on:".dimmed(),
                    task.dependencies.join(", ")
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradle_tasks_core::ExecutionResult;

    fn render(tasks: &[TaskRecord]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render_task_list(&mut out, tasks).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_groups_in_alphabetical_order() {
        let mut build = TaskRecord::new("build", "Assembles and tests this project.", "Build");
        build.dependencies = vec!["test".to_string()];
        let tasks = vec![
            TaskRecord::new("test", "Runs the test suite.", "Verification"),
            build,
        ];

        let output = render(&tasks);

        assert!(output.starts_with("2 tasks loaded"));
        let build_pos = output.find("Build\n").unwrap();
        let verification_pos = output.find("Verification\n").unwrap();
        assert!(build_pos < verification_pos);
        assert!(output.contains("○ build  Assembles and tests this project."));
        assert!(output.contains("depends on: test"));
    }

    #[test]
    fn renders_last_result() {
        let mut task = TaskRecord::new("jar", "", "Build");
        task.last_result = Some(ExecutionResult::success("jar", 2500, ""));

        let output = render(&[task]);

        assert!(output.contains("✓ jar 2.50s"));
    }

    #[test]
    fn renders_empty_list() {
        assert!(render(&[]).contains("No tasks found"));
    }
}
