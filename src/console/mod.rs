pub mod handlers;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::AppConfig;
use crate::protocol::{BoardCommand, BoardEvent};
use crate::state::Board;

pub use handlers::handle_command;

/// Drive the board from a line-oriented JSON stream until the input closes.
///
/// Each non-blank input line is one `BoardCommand`; each produces exactly one
/// `BoardEvent` line on the output.
pub async fn run<R, W>(
    reader: R,
    mut writer: W,
    board: &mut Board,
    config: &AppConfig,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    // Initial state so the UI can render before the first command
    send(&mut writer, &BoardEvent::Board { board: board.clone() }).await?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<BoardCommand>(line) {
            Ok(cmd) => {
                tracing::debug!("Received command: {:?}", cmd);
                handle_command(cmd, board, config).await
            }
            Err(e) => {
                tracing::warn!("Invalid command: {}", e);
                BoardEvent::error("INVALID_COMMAND", e.to_string())
            }
        };

        send(&mut writer, &event).await?;
    }

    tracing::info!("Input closed, ending session");
    Ok(())
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, event: &BoardEvent) -> std::io::Result<()> {
    match serde_json::to_string(event) {
        Ok(mut msg) => {
            msg.push('\n');
            writer.write_all(msg.as_bytes()).await?;
            writer.flush().await
        }
        Err(e) => {
            tracing::error!("Failed to serialize event: {}", e);
            Ok(())
        }
    }
}
