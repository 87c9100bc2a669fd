use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use ruen_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod history;
pub mod lookup;
pub mod text_input;

use history::{handle_export_entry, handle_show_entry, handle_show_history};
use lookup::handle_lookup;
use text_input::{HELP, interpret};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lookups = JoinSet::new();

    tracing::debug!("Event loop waiting for input");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                lookups.shutdown().await;
                break;
            }
        };

        while let Some(finished) = lookups.try_join_next() {
            log_lookup_task(finished);
        }

        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));
        if !handle_events(state.clone(), &app_to_ui_tx, &mut lookups, event).await? {
            // let in-flight lookups land in history before stopping
            while let Some(finished) = lookups.join_next().await {
                log_lookup_task(finished);
            }
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

/// Returns `false` once the app should stop
async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    lookups: &mut JoinSet<anyhow::Result<()>>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    let event = match event {
        AppEvent::TextInput(text) => match interpret(&text) {
            Some(event) => event,
            None => {
                app_to_ui_tx
                    .send(AppEvent::StatusUpdate(HELP.to_string()))
                    .await?;
                return Ok(true);
            }
        },
        other => other,
    };

    match event {
        AppEvent::Lookup(word) => {
            // runs beside the loop so a second request meets the busy guard
            lookups.spawn(handle_lookup(state, word, app_to_ui_tx.clone()));
        }
        AppEvent::ShowHistory { limit } => {
            handle_show_history(state, limit, app_to_ui_tx).await?;
        }
        AppEvent::ShowHistoryEntry(index) => {
            handle_show_entry(state, index, app_to_ui_tx).await?;
        }
        AppEvent::ExportHistoryEntry(index) => {
            handle_export_entry(state, index, app_to_ui_tx).await?;
        }
        AppEvent::Quit => return Ok(false),
        AppEvent::TextInput(_) | AppEvent::Display(_) | AppEvent::StatusUpdate(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(true)
}

fn log_lookup_task(finished: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match finished {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Lookup task failed: {}", e),
        Err(e) => tracing::error!("Lookup task panicked: {}", e),
    }
}
