use anyhow::Result;
use colored::*;
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::session::GradleSession;

pub async fn execute<B: GradleBackend>(session: &GradleSession<B>) -> Result<()> {
    println!("{}", "Inferred Task Dependencies:".bold().underline());

    let listing = session
        .load_tasks()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let result = session.dependency_graph(&listing.tasks);

    if !result.cycles.is_empty() {
        let cycles_description = result
            .cycles
            .iter()
            .map(|cycle| {
                let mut path = cycle.clone();
                if let Some(first) = path.first().cloned() {
                    path.push(first);
                }
                path.join(" -> ")
            })
            .collect::<Vec<_>>()
            .join("; ");

        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("Circular dependencies inferred: {}", cycles_description).yellow()
        );
    }

    // Listing order, one entry per task name
    for node_index in result.graph.node_indices() {
        let Some(task_name) = result.graph.node_weight(node_index) else {
            continue;
        };
        println!("{}", task_name.blue().bold());

        // petgraph yields neighbors newest edge first
        let mut deps: Vec<&str> = result
            .graph
            .neighbors(node_index)
            .filter_map(|neighbor| result.graph.node_weight(neighbor))
            .map(String::as_str)
            .collect();
        deps.reverse();

        if !deps.is_empty() {
            println!("  {} {}", "depends on:".dimmed(), deps.join(", "));
        } else {
            println!("  {}", "no dependencies".dimmed());
        }
    }

    println!();
    println!(
        "{}",
        "Dependencies are guessed from task names and may be incomplete.".dimmed()
    );

    Ok(())
}
