use anyhow::Result;
use colored::*;
use gradle_tasks_core::configs::config_schema;
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::session::GradleSession;

pub fn show<B: GradleBackend>(session: &GradleSession<B>) -> Result<()> {
    println!("{}", "Effective configuration".bold().underline());
    println!("  {} {}", "Project:".dimmed(), session.project_root().display());

    let source = if session.command().is_wrapper() {
        "wrapper".green()
    } else {
        "command".bright_black()
    };
    println!("  {} {} ({})", "Gradle:".dimmed(), session.command(), source);

    println!("  {}", "Dependency rules:".dimmed());
    if session.rules().rules().is_empty() {
        println!("    {}", "none".dimmed());
    }
    for rule in session.rules().rules() {
        let candidates = if rule.candidates.is_empty() {
            "(none)".to_string()
        } else {
            rule.candidates.join(", ")
        };
        println!("    {} -> {}", rule.trigger.cyan(), candidates);
    }

    Ok(())
}

pub fn schema() -> Result<()> {
    let schema = config_schema().map_err(|e| anyhow::anyhow!("Failed to render schema: {}", e))?;
    println!("{}", schema);
    Ok(())
}
