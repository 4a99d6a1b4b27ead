use anyhow::Result;
use colored::*;
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::session::GradleSession;

pub async fn execute<B: GradleBackend>(session: &GradleSession<B>, task: &str) -> Result<()> {
    println!("{} {}", "Details for".bold(), task.cyan());
    println!();

    let details = session
        .task_details(task)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get task details: {}", e))?;

    if details.trim().is_empty() {
        println!("  {}", "Gradle printed no details".dimmed());
    } else {
        print!("{}", details);
    }

    Ok(())
}
