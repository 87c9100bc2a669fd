use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use ruen_types::HistoryEntry;

use crate::error::HistoryError;
use crate::render::clean::{sanitize_field, short_summary};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SEPARATOR: char = '|';

/// Line storage behind the history
pub trait HistoryLog: Send + Sync {
    /// Append one record; `line` carries no trailing newline
    fn append_line(&self, line: &str) -> io::Result<()>;

    /// All records in storage order
    fn read_lines(&self) -> io::Result<Vec<String>>;
}

impl<T: HistoryLog + ?Sized> HistoryLog for Arc<T> {
    fn append_line(&self, line: &str) -> io::Result<()> {
        (**self).append_line(line)
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        (**self).read_lines()
    }
}

/// Plain text file, one record per line
pub struct FileLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryLog for FileLog {
    fn append_line(&self, line: &str) -> io::Result<()> {
        let _lock = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // single write so a record is never interleaved
        file.write_all(format!("{line}\n").as_bytes())?;
        file.flush()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

/// In-process log, handy for tests and for running without a history file
#[derive(Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryLog for MemoryLog {
    fn append_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
        Ok(())
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

/// Append-only lookup history, read back newest first
pub struct HistoryStore<L = FileLog> {
    log: L,
}

impl HistoryStore<FileLog> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileLog::new(path))
    }
}

impl<L: HistoryLog> HistoryStore<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Persist one entry. Delimiters and line breaks are stripped from every field.
    pub fn append(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let line = [
            &entry.timestamp,
            &entry.word,
            &entry.full_rendering,
            &entry.short_summary,
        ]
        .iter()
        .map(|field| sanitize_field(field))
        .collect::<Vec<_>>()
        .join("|");

        self.log.append_line(&line)?;
        tracing::debug!("Appended history entry for '{}'", entry.word);
        Ok(())
    }

    /// Build an entry for a finished lookup at `at` and append it
    pub fn record(
        &self,
        word: &str,
        rendering: &str,
        at: DateTime<Local>,
    ) -> Result<HistoryEntry, HistoryError> {
        let entry = new_entry(word, rendering, at);
        self.append(&entry)?;
        Ok(entry)
    }

    /// Every well-formed record, most recent first
    pub fn load_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let lines = self.log.read_lines()?;
        let mut entries: Vec<HistoryEntry> = lines.iter().filter_map(|l| parse_line(l)).collect();

        if entries.len() != lines.len() {
            tracing::debug!(
                "Skipped {} malformed history lines",
                lines.len() - entries.len()
            );
        }

        entries.reverse();
        Ok(entries)
    }
}

/// Entry with sanitized fields and a summary derived from the rendering
pub fn new_entry(word: &str, rendering: &str, at: DateTime<Local>) -> HistoryEntry {
    let full_rendering = sanitize_field(rendering);
    let short_summary = sanitize_field(&short_summary(&full_rendering));

    HistoryEntry {
        timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        word: sanitize_field(word),
        full_rendering,
        short_summary,
    }
}

fn parse_line(line: &str) -> Option<HistoryEntry> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() < 4 {
        return None;
    }

    Some(HistoryEntry {
        timestamp: parts[0].to_string(),
        word: parts[1].to_string(),
        full_rendering: parts[2].to_string(),
        short_summary: parts[3].to_string(),
    })
}
