use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::*;
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::session::GradleSession;
use gradle_tasks_core::tasks::TaskStatus;
use gradle_tasks_core::TaskRecord;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::list::render_task_list;
use super::run::render_result;

const PROMPT: &str = "gradle> ";

pub async fn execute<B: GradleBackend>(session: &mut GradleSession<B>) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut shell = Shell::new(session);
    shell.run(stdin, &mut io::stdout()).await
}

/// Interactive loop over one session. The last listing is kept so runs can
/// be reflected without asking Gradle again.
pub struct Shell<'a, B: GradleBackend> {
    session: &'a mut GradleSession<B>,
    tasks: Option<Vec<TaskRecord>>,
}

impl<'a, B: GradleBackend> Shell<'a, B> {
    pub fn new(session: &'a mut GradleSession<B>) -> Self {
        Self {
            session,
            tasks: None,
        }
    }

    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(
            out,
            "{} {}",
            "Gradle tasks for".bold(),
            self.session.project_root().display()
        )?;
        writeln!(out, "{}", "Type 'help' for commands.".dimmed())?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                writeln!(out)?;
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.splitn(2, char::is_whitespace);
            let command = parts.next().unwrap_or("");
            let argument = parts.next().unwrap_or("").trim();

            let outcome: Result<()> = match command {
                "quit" | "exit" => break,
                "help" => print_help(out).map_err(Into::into),
                "list" | "ls" => self.list(out, false).await,
                "refresh" => self.list(out, true).await,
                "run" => self.run_task(out, argument).await,
                "describe" => self.describe(out, argument).await,
                _ => writeln!(
                    out,
                    "{}",
                    format!("Unknown command '{}', type 'help'", command).yellow()
                )
                .map_err(Into::into),
            };

            if let Err(e) = outcome {
                writeln!(out, "{} {}", "Error:".red().bold(), e)?;
            }
        }

        Ok(())
    }

    async fn list<W: Write>(&mut self, out: &mut W, reload: bool) -> Result<()> {
        if reload || self.tasks.is_none() {
            writeln!(out, "{}", "Loading Gradle tasks...".dimmed())?;
            let listing = self.session.load_tasks().await?;
            self.tasks = Some(listing.tasks);
        }

        render_task_list(out, self.tasks.as_deref().unwrap_or_default())?;
        Ok(())
    }

    async fn run_task<W: Write>(&mut self, out: &mut W, task: &str) -> Result<()> {
        if task.is_empty() {
            anyhow::bail!("Usage: run <task>");
        }

        writeln!(out, "{} {}", TaskStatus::Running.symbol(), task.cyan())?;
        let result = self.session.run_task(task).await?;
        render_result(out, &result)?;

        if let Some(record) = self
            .tasks
            .iter_mut()
            .flatten()
            .find(|record| record.name == task)
        {
            record.last_result = Some(result);
        }
        Ok(())
    }

    async fn describe<W: Write>(&mut self, out: &mut W, task: &str) -> Result<()> {
        if task.is_empty() {
            anyhow::bail!("Usage: describe <task>");
        }

        let details = self.session.task_details(task).await?;
        write!(out, "{}", details)?;
        if !details.ends_with('\n') {
            writeln!(out)?;
        }
        Ok(())
    }
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  {:<16} {}", "list", "show tasks (loads them once)")?;
    writeln!(out, "  {:<16} {}", "refresh", "reload tasks from Gradle")?;
    writeln!(out, "  {:<16} {}", "run <task>", "run a task")?;
    writeln!(out, "  {:<16} {}", "describe <task>", "show Gradle's help for a task")?;
    writeln!(out, "  {:<16} {}", "quit", "leave the shell")
}
