use ruen_config::SourceKind;
use ruen_config::source::SourceConfig;
use ruen_core::ParseError;
use ruen_fetch::{FetchError, FetchRequest};
use ruen_types::LookupResult;

use crate::{openrussian, yandex};

/// Upstream dictionary chosen by configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    OpenRussian {
        base_url: String,
    },
    Yandex {
        base_url: String,
        api_key: String,
        lang: String,
    },
}

impl DictionarySource {
    pub fn from_config(config: &SourceConfig) -> Self {
        match config.kind {
            SourceKind::OpenRussian => DictionarySource::OpenRussian {
                base_url: config.openrussian_url.clone(),
            },
            SourceKind::Yandex => DictionarySource::Yandex {
                base_url: config.yandex_url.clone(),
                api_key: config.yandex_api_key.clone(),
                lang: config.lang.clone(),
            },
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            DictionarySource::OpenRussian { .. } => SourceKind::OpenRussian,
            DictionarySource::Yandex { .. } => SourceKind::Yandex,
        }
    }

    /// Human readable name for status lines
    pub fn name(&self) -> &'static str {
        match self {
            DictionarySource::OpenRussian { .. } => "OpenRussian.org",
            DictionarySource::Yandex { .. } => "Yandex Dictionary",
        }
    }

    pub fn request(&self, word: &str) -> Result<FetchRequest, FetchError> {
        match self {
            DictionarySource::OpenRussian { base_url } => openrussian::request(base_url, word),
            DictionarySource::Yandex {
                base_url,
                api_key,
                lang,
            } => yandex::request(base_url, api_key, lang, word),
        }
    }

    pub fn parse(&self, data: &[u8], word: &str) -> Result<LookupResult, ParseError> {
        match self {
            DictionarySource::OpenRussian { .. } => openrussian::parse(data, word),
            DictionarySource::Yandex { .. } => yandex::parse(data, word),
        }
    }
}
