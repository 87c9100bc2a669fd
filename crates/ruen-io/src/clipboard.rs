use arboard::Clipboard;

/// Sink for exported text
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard, opened per call
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        tracing::debug!("Copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
