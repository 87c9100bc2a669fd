use std::sync::Arc;

use chrono::Local;
use kanal::AsyncSender;
use ruen_types::AppEvent;

use crate::lookup::{LookupError, LookupOutcome};
use crate::state::AppState;
use crate::status::Status;
use crate::ui::OutputFormat;

/// Rendering of an outcome in the chosen format
pub fn describe(outcome: &LookupOutcome, format: OutputFormat) -> &str {
    match format {
        OutputFormat::Markdown => &outcome.rendered.markdown,
        OutputFormat::Rich => &outcome.rendered.rich,
    }
}

/// Status line for a finished lookup
pub fn outcome_status(outcome: &LookupOutcome) -> String {
    let now = Local::now();

    if !outcome.found() {
        Status::NotFound(&outcome.word).to_string()
    } else if outcome.copied {
        Status::Copied(now).to_string()
    } else {
        Status::Found(now).to_string()
    }
}

/// Status line for a failed lookup
pub fn error_status(error: &LookupError) -> String {
    match error {
        LookupError::Parse(e) => {
            tracing::debug!("Parse failure: {}", e);
            Status::ParseError.to_string()
        }
        LookupError::Fetch(e) => Status::FetchFailed(&e.to_string()).to_string(),
        LookupError::EmptyQuery | LookupError::Busy => error.to_string(),
    }
}

pub async fn handle_lookup(
    state: Arc<AppState>,
    word: String,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::StatusUpdate(Status::LookingUp(&word).to_string()))
        .await?;

    match state.lookup.lookup(&word).await {
        Ok(outcome) => {
            app_to_ui_tx
                .send(AppEvent::Display(describe(&outcome, state.format).to_string()))
                .await?;
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(outcome_status(&outcome)))
                .await?;
        }
        Err(e) => {
            tracing::warn!("Lookup of '{}' failed: {}", word, e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(error_status(&e)))
                .await?;
        }
    }

    Ok(())
}
