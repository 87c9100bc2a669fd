use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Local;
use ruen_core::history::HistoryLog;
use ruen_core::preprocess::{Preprocessor, QueryPreprocessor};
use ruen_core::{HistoryError, HistoryStore, ParseError, Rendered};
use ruen_fetch::{FetchError, Fetcher, fetch_with_timeout};
use ruen_io::ClipboardSink;
use ruen_lang_russian::DictionarySource;
use ruen_types::{HistoryEntry, LookupResult};

use crate::status::Status;

pub type SharedLog = Arc<dyn HistoryLog>;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a Russian word to lookup.")]
    EmptyQuery,

    #[error("A lookup is already in progress")]
    Busy,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Everything one successful fetch+parse produced
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub word: String,
    pub result: LookupResult,
    pub rendered: Rendered,
    /// `None` when nothing was found, history is off, or the append failed
    pub history_entry: Option<HistoryEntry>,
    pub copied: bool,
}

impl LookupOutcome {
    pub fn found(&self) -> bool {
        !self.result.is_empty()
    }
}

/// Marks a lookup as outstanding until dropped
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Fetch, parse, render and record one word at a time
pub struct LookupService {
    source: DictionarySource,
    fetcher: Arc<dyn Fetcher>,
    history: Option<HistoryStore<SharedLog>>,
    clipboard: Option<Arc<dyn ClipboardSink>>,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl LookupService {
    pub fn new(source: DictionarySource, fetcher: Arc<dyn Fetcher>, timeout: Duration) -> Self {
        Self {
            source,
            fetcher,
            history: None,
            clipboard: None,
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_history(mut self, log: SharedLog) -> Self {
        self.history = Some(HistoryStore::new(log));
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Look up an already converted word. Rejected with `Busy` while another lookup runs.
    pub async fn lookup(&self, input: &str) -> Result<LookupOutcome, LookupError> {
        let word = QueryPreprocessor.process(input);
        if word.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let _in_flight = InFlight::acquire(&self.in_flight).ok_or(LookupError::Busy)?;

        tracing::debug!("{}", Status::LookingUp(&word));

        let request = self.source.request(&word)?;
        let data = fetch_with_timeout(self.fetcher.as_ref(), &request, self.timeout).await?;
        let result = self.source.parse(&data, &word)?;
        let rendered = Rendered::from_result(&result);

        let mut outcome = LookupOutcome {
            word,
            result,
            rendered,
            history_entry: None,
            copied: false,
        };

        if !outcome.found() {
            tracing::debug!("No translations for '{}'", outcome.word);
            return Ok(outcome);
        }

        outcome.history_entry = self.record(&outcome.word, &outcome.rendered.rich);
        outcome.copied = self.copy(&outcome.rendered.markdown);

        tracing::debug!("{}", Status::Found(Local::now()));
        Ok(outcome)
    }

    /// Newest first; empty when history is disabled
    pub fn history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match &self.history {
            Some(store) => store.load_all(),
            None => Ok(Vec::new()),
        }
    }

    /// A failed append is logged and never fails the lookup
    fn record(&self, word: &str, rendering: &str) -> Option<HistoryEntry> {
        let store = self.history.as_ref()?;

        match store.record(word, rendering, Local::now()) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to save '{}' to history: {}", word, e);
                None
            }
        }
    }

    pub fn copy(&self, text: &str) -> bool {
        let Some(clipboard) = &self.clipboard else {
            return false;
        };

        match clipboard.set_text(text) {
            Ok(()) => {
                tracing::debug!("{}", Status::Copied(Local::now()));
                true
            }
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                false
            }
        }
    }
}
