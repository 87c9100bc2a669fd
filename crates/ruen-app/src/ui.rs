use std::fmt::Write;

use kanal::AsyncReceiver;
use ruen_types::{AppEvent, HistoryEntry};
use tokio_util::sync::CancellationToken;

/// How lookup results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Rich,
}

/// Numbered history list, newest first
pub fn history_listing(entries: &[HistoryEntry], limit: Option<usize>) -> String {
    if entries.is_empty() {
        return "History is empty.".to_string();
    }

    let mut out = String::new();
    for (index, entry) in entries.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, entry.label());
    }
    out.trim_end().to_string()
}

fn show(event: AppEvent) {
    match event {
        AppEvent::Display(text) => println!("{text}"),
        AppEvent::StatusUpdate(status) => eprintln!("-- {status}"),
        other => tracing::debug!("UI ignoring {:?}", std::mem::discriminant(&other)),
    }
}

/// Terminal side: prints whatever the app loop sends over.
/// Events already queued when cancellation arrives are still printed.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            biased;
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        show(event);
    }

    while let Ok(Some(event)) = app_to_ui_rx.try_recv() {
        show(event);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp: "2024-01-01 10:00:00".to_string(),
            word: word.to_string(),
            full_rendering: String::new(),
            short_summary: format!("{word} summary"),
        }
    }

    #[test]
    fn listing_is_numbered_and_limited() {
        let entries = vec![entry("три"), entry("два"), entry("один")];

        assert_eq!(
            history_listing(&entries, Some(2)),
            "  1. 2024-01-01 10:00:00 - три: три summary\n  2. 2024-01-01 10:00:00 - два: два summary"
        );
        assert_eq!(history_listing(&entries, None).lines().count(), 3);
        assert_eq!(history_listing(&[], None), "History is empty.");
    }
}
