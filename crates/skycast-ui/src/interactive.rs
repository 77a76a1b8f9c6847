//! Prompt loop: every input line is a submission.
//!
//! The loop owns the [`WeatherSession`]. Lookups run on spawned tasks and
//! report back over a channel, so a new line can be submitted while an
//! earlier lookup is still in flight. Only the latest submission is shown.

use std::sync::Arc;

use anyhow::Result;
use skycast_weather::{ApplyOutcome, WeatherLookup, WeatherSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::render::{Renderer, PROMPT};
use crate::services::{request_fetch, WeatherServiceMessage};

const QUIT_COMMANDS: [&str; 3] = [":quit", ":q", ":exit"];

/// Run the session until a quit command, or until input ends and the
/// latest lookup has been shown.
pub async fn run<R, W>(
    lookup: Arc<WeatherLookup>,
    renderer: Renderer,
    input: R,
    mut output: W,
) -> Result<WeatherSession>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = WeatherSession::new();
    let mut lines = input.lines();
    let mut input_open = true;

    write_str(&mut output, PROMPT).await?;

    loop {
        if !input_open && !session.is_loading() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };

                let query = line.trim();
                if QUIT_COMMANDS.contains(&query) {
                    break;
                }

                let ticket = session.begin(query);
                tracing::debug!("Submitted '{}' as generation {}", query, ticket.generation());
                write_line(&mut output, &renderer.loading(query)).await?;
                request_fetch(&tx, Arc::clone(&lookup), ticket);
            }
            Some(message) = rx.recv() => {
                let WeatherServiceMessage::FetchDone { ticket, result } = message;
                if session.apply(&ticket, result) == ApplyOutcome::Stale {
                    continue;
                }

                let rendered = match (session.snapshot(), session.error()) {
                    (Some(snapshot), _) => renderer.panel(snapshot),
                    (None, Some(message)) => renderer.error(message),
                    (None, None) => continue,
                };
                write_line(&mut output, &rendered).await?;
                if input_open {
                    write_str(&mut output, PROMPT).await?;
                }
            }
        }
    }

    output.flush().await?;
    Ok(session)
}

async fn write_str<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    write_str(output, &format!("{}\n", text)).await
}
