use kanal::AsyncSender;
use ruen_types::AppEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

/// Line reader for the interactive prompt. Sends `Quit` once input ends.
pub async fn read_input<R>(
    reader: R,
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::debug!("Input reader stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::debug!("Input closed");
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        ui_to_app_tx.send(AppEvent::TextInput(line)).await?;
    }

    ui_to_app_tx.send(AppEvent::Quit).await?;
    Ok(())
}
