use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_path() -> PathBuf {
    PathBuf::from("russian_word_history.txt")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Pipe-delimited lookup log
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let path = env::var("RUEN_HISTORY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        Self {
            enabled: default_enabled(),
            path,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}
