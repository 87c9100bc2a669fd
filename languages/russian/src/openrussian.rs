//! OpenRussian word pages: the entry ships as Next.js page data inside the HTML.

use ruen_core::ParseError;
use ruen_fetch::{FetchError, FetchRequest, Url};
use ruen_types::{ExamplePair, LookupResult, TranslationEntry};
use serde_json::Value;

const OPEN_TAG: &str = r#"<script id="__NEXT_DATA__" type="application/json">"#;
const CLOSE_TAG: &str = "</script>";
const WORDS_PATH: &str = "/props/pageProps/info/words";
const MAX_SENTENCES: usize = 10;

/// Page URL for `word` under `base_url`
pub fn request(base_url: &str, word: &str) -> Result<FetchRequest, FetchError> {
    let mut url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .push(word);

    Ok(FetchRequest::get(url).header("Accept", "text/html"))
}

/// Text between the page-data script tags
pub fn extract_embedded_json(html: &str) -> Option<&str> {
    let start = html.find(OPEN_TAG)? + OPEN_TAG.len();
    let len = html[start..].find(CLOSE_TAG)?;
    Some(&html[start..start + len])
}

pub fn parse(data: &[u8], word: &str) -> Result<LookupResult, ParseError> {
    let html = String::from_utf8_lossy(data);
    let json = extract_embedded_json(&html).ok_or(ParseError::NoEmbeddedData)?;

    let root: Value = serde_json::from_str(json)?;

    let word_data = root
        .pointer(WORDS_PATH)
        .and_then(Value::as_array)
        .and_then(|words| words.first())
        .ok_or(ParseError::NoEntry)?;

    let mut result = LookupResult::new(word);

    for translation in array(word_data, "translations") {
        let Some(first) = translation.get("tls").and_then(Value::as_array).and_then(|tls| tls.first())
        else {
            continue;
        };

        let Some(mut entry) = TranslationEntry::new(first.as_str().unwrap_or_default()) else {
            continue;
        };

        let example_ru = string(translation, "exampleRu");
        let example_tl = string(translation, "exampleTl");
        if !example_ru.is_empty() && !example_tl.is_empty() {
            entry.example = Some(ExamplePair::new(example_ru, example_tl));
        }

        result.translations.push(entry);
    }

    // kept verbatim, the sentences carry the site's own highlighting markup
    result.examples = array(word_data, "sentences")
        .iter()
        .take(MAX_SENTENCES)
        .map(|sentence| ExamplePair::new(string(sentence, "ru"), string(sentence, "tl")))
        .collect();

    tracing::debug!(
        "OpenRussian '{}': {} translations, {} examples",
        word,
        result.translations.len(),
        result.examples.len()
    );

    Ok(result)
}

fn array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}
