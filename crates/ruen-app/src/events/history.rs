use std::sync::Arc;

use chrono::Local;
use kanal::AsyncSender;
use ruen_core::render::render_history_markdown;
use ruen_types::{AppEvent, HistoryEntry};

use crate::state::AppState;
use crate::status::Status;
use crate::ui::{OutputFormat, history_listing};

/// n-th newest entry, 1-based
pub fn nth_entry(state: &AppState, index: usize) -> anyhow::Result<Option<HistoryEntry>> {
    let entries = state.lookup.history()?;
    Ok(index.checked_sub(1).and_then(|i| entries.into_iter().nth(i)))
}

/// Stored entry in the chosen format. Rich is the saved rendering verbatim.
pub fn entry_document(entry: &HistoryEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Rich => entry.full_rendering.clone(),
        OutputFormat::Markdown => render_history_markdown(entry),
    }
}

pub async fn handle_show_history(
    state: Arc<AppState>,
    limit: Option<usize>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !state.config.history.enabled {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate("History is disabled".to_string()))
            .await?;
        return Ok(());
    }

    let entries = state.lookup.history()?;
    tracing::debug!("Loaded {} history entries", entries.len());

    app_to_ui_tx
        .send(AppEvent::Display(history_listing(&entries, limit)))
        .await?;

    Ok(())
}

pub async fn handle_show_entry(
    state: Arc<AppState>,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(entry) = nth_entry(&state, index)? else {
        return missing(index, app_to_ui_tx).await;
    };

    app_to_ui_tx
        .send(AppEvent::Display(entry_document(&entry, state.format)))
        .await?;
    app_to_ui_tx
        .send(AppEvent::StatusUpdate(
            Status::HistoryDisplayed(&entry.word).to_string(),
        ))
        .await?;

    Ok(())
}

pub async fn handle_export_entry(
    state: Arc<AppState>,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(entry) = nth_entry(&state, index)? else {
        return missing(index, app_to_ui_tx).await;
    };

    let markdown = render_history_markdown(&entry);

    match state.clipboard.set_text(&markdown) {
        Ok(()) => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(
                    Status::HistoryCopied(Local::now()).to_string(),
                ))
                .await?;
        }
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            // print it so it can still be copied by hand
            app_to_ui_tx.send(AppEvent::Display(markdown)).await?;
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Clipboard unavailable: {e}")))
                .await?;
        }
    }

    Ok(())
}

async fn missing(index: usize, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::StatusUpdate(format!("No history entry #{index}")))
        .await?;
    Ok(())
}
