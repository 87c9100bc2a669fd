use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A line typed at the prompt, before keyboard conversion
    TextInput(String),
    /// Lookup of an already converted word
    Lookup(String),
    ShowHistory {
        limit: Option<usize>,
    },
    /// Redisplay the n-th newest history entry (1-based)
    ShowHistoryEntry(usize),
    /// Put the n-th newest history entry on the clipboard as Markdown
    ExportHistoryEntry(usize),
    /// Document for the output side
    Display(String),
    StatusUpdate(String),
    Quit,
}

/// Normalized outcome of parsing one dictionary response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub query_word: String,
    pub translations: Vec<TranslationEntry>,
    pub examples: Vec<ExamplePair>,
}

impl LookupResult {
    pub fn new(query_word: impl Into<String>) -> Self {
        Self {
            query_word: query_word.into(),
            translations: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub text: String,
    pub part_of_speech: Option<String>,
    pub synonyms: Vec<String>,
    /// Inline usage example attached to this sense
    pub example: Option<ExamplePair>,
}

impl TranslationEntry {
    /// Returns `None` for empty text, upstream candidates like that are dropped.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            text,
            ..Default::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePair {
    pub source_text: String,
    pub target_text: String,
}

impl ExamplePair {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// One persisted lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub word: String,
    /// Rich rendering captured at lookup time, never regenerated
    pub full_rendering: String,
    pub short_summary: String,
}

impl HistoryEntry {
    /// Text shown in the history list
    pub fn label(&self) -> String {
        format!("{} - {}: {}", self.timestamp, self.word, self.short_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_translation_text_is_dropped() {
        assert!(TranslationEntry::new("").is_none());
        assert_eq!(TranslationEntry::new("cat").unwrap().text, "cat");
    }

    #[test]
    fn history_label_format() {
        let entry = HistoryEntry {
            timestamp: "2024-01-02 03:04:05".to_string(),
            word: "кот".to_string(),
            full_rendering: "<h2>кот</h2>".to_string(),
            short_summary: "котTranslations".to_string(),
        };

        assert_eq!(entry.label(), "2024-01-02 03:04:05 - кот: котTranslations");
    }
}
