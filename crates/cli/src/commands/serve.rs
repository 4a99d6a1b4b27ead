use anyhow::{Context, Result};
use gradle_tasks_core::execution::GradleBackend;
use gradle_tasks_core::session::GradleSession;
use gradle_tasks_protocol::{PanelEvent, PanelRequest};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

pub async fn execute<B: GradleBackend>(session: &mut GradleSession<B>) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    relay(session, stdin, stdout).await
}

/// Handle one JSON request per input line until EOF, one at a time
pub async fn relay<B, R, W>(session: &mut GradleSession<B>, input: R, mut output: W) -> Result<()>
where
    B: GradleBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read panel request")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<PanelRequest>(line) {
            Ok(request) => {
                debug!(?request, "Panel request");
                handle_request(session, request, &mut output).await?;
            }
            Err(e) => {
                send(&mut output, &PanelEvent::error(format!("Invalid request: {}", e))).await?;
            }
        }
    }

    Ok(())
}

async fn handle_request<B, W>(
    session: &mut GradleSession<B>,
    request: PanelRequest,
    output: &mut W,
) -> Result<()>
where
    B: GradleBackend,
    W: AsyncWrite + Unpin,
{
    match request {
        PanelRequest::Ready | PanelRequest::Refresh => {
            send(output, &PanelEvent::loading("Loading Gradle tasks...")).await?;
            let event = match session.load_tasks().await {
                Ok(listing) => PanelEvent::TasksLoaded {
                    tasks: listing.tasks,
                },
                Err(e) => PanelEvent::error(e.to_string()),
            };
            send(output, &event).await
        }
        PanelRequest::RunTask { task_name } => {
            send(
                output,
                &PanelEvent::TaskRunning {
                    task_name: task_name.clone(),
                },
            )
            .await?;
            let event = match session.run_task(&task_name).await {
                Ok(result) => PanelEvent::TaskCompleted { result },
                Err(e) => PanelEvent::error(e.to_string()),
            };
            send(output, &event).await
        }
        PanelRequest::GetTaskDetails { task_name } => {
            let event = match session.task_details(&task_name).await {
                Ok(details) => PanelEvent::TaskDetails { task_name, details },
                Err(e) => PanelEvent::error(e.to_string()),
            };
            send(output, &event).await
        }
    }
}

async fn send<W: AsyncWrite + Unpin>(output: &mut W, event: &PanelEvent) -> Result<()> {
    let mut line = serde_json::to_string(event)?;
    line.push('\n');
    output
        .write_all(line.as_bytes())
        .await
        .context("Failed to write panel event")?;
    output.flush().await?;
    Ok(())
}
