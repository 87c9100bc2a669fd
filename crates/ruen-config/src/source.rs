use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which upstream dictionary the lookups target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// HTML page with the entry embedded as JSON
    #[default]
    OpenRussian,
    /// Flat JSON dictionary API
    Yandex,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown dictionary source: {0} (expected `openrussian` or `yandex`)")]
pub struct UnknownSource(pub String);

impl FromStr for SourceKind {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrussian" => Ok(SourceKind::OpenRussian),
            "yandex" => Ok(SourceKind::Yandex),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::OpenRussian => write!(f, "openrussian"),
            SourceKind::Yandex => write!(f, "yandex"),
        }
    }
}

fn default_openrussian_url() -> String {
    "https://en.openrussian.org/ru/".to_string()
}

fn default_yandex_url() -> String {
    "https://dictionary.yandex.net/api/v1/dicservice.json/lookup".to_string()
}

fn default_lang() -> String {
    "ru-en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    #[serde(default = "default_openrussian_url")]
    pub openrussian_url: String,
    #[serde(default = "default_yandex_url")]
    pub yandex_url: String,
    #[serde(default)]
    pub yandex_api_key: String,
    /// Language pair for the JSON API
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl SourceConfig {
    pub fn new() -> Self {
        let kind = env::var("RUEN_SOURCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            kind,
            openrussian_url: env::var("RUEN_OPENRUSSIAN_URL")
                .unwrap_or_else(|_| default_openrussian_url()),
            yandex_url: env::var("RUEN_YANDEX_URL").unwrap_or_else(|_| default_yandex_url()),
            yandex_api_key: env::var("RUEN_YANDEX_KEY").unwrap_or_default(),
            lang: env::var("RUEN_LANG").unwrap_or_else(|_| default_lang()),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            openrussian_url: default_openrussian_url(),
            yandex_url: default_yandex_url(),
            yandex_api_key: String::new(),
            lang: default_lang(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_parses_case_insensitively() {
        assert_eq!("OpenRussian".parse::<SourceKind>().unwrap(), SourceKind::OpenRussian);
        assert_eq!(" yandex ".parse::<SourceKind>().unwrap(), SourceKind::Yandex);
        assert!("wiktionary".parse::<SourceKind>().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SourceConfig = serde_json::from_str(r#"{"kind": "yandex"}"#).unwrap();

        assert_eq!(config.kind, SourceKind::Yandex);
        assert_eq!(config.lang, "ru-en");
        assert_eq!(config.openrussian_url, default_openrussian_url());
    }
}
