use std::sync::Arc;

use ruen_config::Config;
use ruen_core::FileLog;
use ruen_fetch::{Fetcher, HttpFetcher};
use ruen_io::{ClipboardSink, SystemClipboard};
use ruen_lang_russian::DictionarySource;

use crate::lookup::LookupService;
use crate::ui::OutputFormat;

pub struct AppState {
    pub config: Config,
    pub lookup: LookupService,
    /// Explicit exports go here even when auto-copy is off
    pub clipboard: Arc<dyn ClipboardSink>,
    pub format: OutputFormat,
}

impl AppState {
    pub fn new(config: Config, format: OutputFormat) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(&config.network.user_agent, config.network.timeout())?;
        Ok(Self::with_parts(
            config,
            format,
            Arc::new(fetcher),
            Arc::new(SystemClipboard),
        ))
    }

    pub fn with_parts(
        config: Config,
        format: OutputFormat,
        fetcher: Arc<dyn Fetcher>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        let source = DictionarySource::from_config(&config.source);
        tracing::info!("Using {} ({})", source.name(), source.kind());

        let mut lookup = LookupService::new(source, fetcher, config.network.timeout());

        if config.history.enabled {
            tracing::debug!("History file: {}", config.history.path.display());
            lookup = lookup.with_history(Arc::new(FileLog::new(&config.history.path)));
        }

        if config.auto_copy {
            lookup = lookup.with_clipboard(clipboard.clone());
        }

        Self {
            config,
            lookup,
            clipboard,
            format,
        }
    }
}
