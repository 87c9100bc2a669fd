use std::env;

use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::network::NetworkConfig;
use self::source::SourceConfig;

pub mod history;
pub mod network;
pub mod source;

pub use self::source::SourceKind;

fn default_auto_copy() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub history: HistoryConfig,
    pub network: NetworkConfig,

    /// Put the Markdown rendering on the clipboard after each successful lookup
    #[serde(default = "default_auto_copy")]
    pub auto_copy: bool,
    /// Default tracing filter, `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        let auto_copy = env::var("RUEN_AUTO_COPY")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or_else(default_auto_copy);

        let log_level = env::var("RUEN_LOG").unwrap_or_else(|_| default_log_level());

        Config {
            source: SourceConfig::new(),
            history: HistoryConfig::new(),
            network: NetworkConfig::new(),

            auto_copy,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig::default(),
            history: HistoryConfig::default(),
            network: NetworkConfig::default(),
            auto_copy: default_auto_copy(),
            log_level: default_log_level(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn empty_profile_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert!(config.auto_copy);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.source.kind, SourceKind::OpenRussian);
        assert_eq!(config.network.timeout_seconds, 10);
        assert!(config.history.enabled);
    }

    #[test]
    fn nested_sections_override_independently() {
        let config: Config = serde_json::from_str(
            r#"{"network": {"timeout_seconds": 3}, "history": {"path": "h.txt"}}"#,
        )
        .unwrap();

        assert_eq!(config.network.timeout().as_secs(), 3);
        assert_eq!(config.history.path.to_str(), Some("h.txt"));
        assert!(config.history.enabled);
    }
}
