use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradle_tasks_core::session::{GradleSession, SessionConfig};

mod commands;
mod logging;

use logging::LogLevel;

/// gradle-tasks - Browse and run Gradle tasks
#[derive(Parser)]
#[command(name = "gradle-tasks")]
#[command(about = "Browse, inspect and run the tasks of a Gradle project")]
#[command(version)]
struct Cli {
    /// Path to the Gradle project root (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Gradle executable to use when the wrapper is disabled or missing
    #[arg(long, global = true)]
    gradle_command: Option<String>,

    /// Ignore the project's gradlew wrapper
    #[arg(long, global = true)]
    no_wrapper: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks grouped by category with inferred dependencies
    List {
        /// Print the task records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a task
    Run {
        /// Task name, e.g. "build" or "app:test"
        task: String,
    },
    /// Show Gradle's help for a task
    Describe {
        /// Task name, e.g. "build" or "app:test"
        task: String,
    },
    /// Show the inferred task dependency graph
    Deps,
    /// Interactive shell that keeps task results between commands
    Shell,
    /// Relay JSON panel messages between stdin/stdout and Gradle
    Serve,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the JSON schema of .gradle-tasks.yml
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    if let Commands::Config {
        config_command: ConfigCommands::Schema,
    } = cli.command
    {
        return commands::config::schema();
    }

    // Open the session once; every command below works through it
    let mut session = GradleSession::new(SessionConfig {
        project_root: cli.project,
        gradle_command: cli.gradle_command,
        use_wrapper: cli.no_wrapper.then_some(false),
    })
    .map_err(|e| anyhow::anyhow!("Failed to open Gradle project: {}", e))?;

    match cli.command {
        Commands::List { json } => commands::list::execute(&session, json).await,
        Commands::Run { task } => commands::run::execute(&mut session, &task).await,
        Commands::Describe { task } => commands::describe::execute(&session, &task).await,
        Commands::Deps => commands::deps::execute(&session).await,
        Commands::Shell => commands::shell::execute(&mut session).await,
        Commands::Serve => commands::serve::execute(&mut session).await,
        Commands::Config { config_command } => match config_command {
            ConfigCommands::Show => commands::config::show(&session),
            ConfigCommands::Schema => commands::config::schema(),
        },
    }
}
