//! Yandex dictionary API, `def -> tr -> syn/ex` JSON.

use ruen_core::ParseError;
use ruen_core::render::clean::clean_example_text;
use ruen_fetch::{FetchError, FetchRequest, Url};
use ruen_types::{ExamplePair, LookupResult, TranslationEntry};
use serde::Deserialize;

const MAX_TRANSLATIONS_PER_DEF: usize = 10;

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    head: Head,
    #[serde(default)]
    def: Vec<Definition>,
}

#[derive(Debug, Default, Deserialize)]
struct Head {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    text: Option<String>,
    pos: Option<String>,
    #[serde(default)]
    tr: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: Option<String>,
    #[serde(default)]
    syn: Vec<Text>,
    #[serde(default)]
    ex: Vec<Example>,
}

#[derive(Debug, Deserialize)]
struct Example {
    text: Option<String>,
    #[serde(default)]
    tr: Vec<Text>,
}

#[derive(Debug, Deserialize)]
struct Text {
    text: Option<String>,
}

pub fn request(
    base_url: &str,
    api_key: &str,
    lang: &str,
    word: &str,
) -> Result<FetchRequest, FetchError> {
    if api_key.is_empty() {
        tracing::warn!("No Yandex API key configured, the request will be rejected upstream");
    }

    let url = Url::parse_with_params(base_url, [("key", api_key), ("lang", lang), ("text", word)])
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    Ok(FetchRequest::get(url).header("Accept", "application/json"))
}

/// The headword comes from the payload, `word` only fills in when it is missing.
pub fn parse(data: &[u8], word: &str) -> Result<LookupResult, ParseError> {
    let response: Response = serde_json::from_slice(data)?;

    if response.def.is_empty() {
        return Err(ParseError::NoEntry);
    }

    let query_word = response
        .head
        .text
        .filter(|t| !t.is_empty())
        .or_else(|| response.def.iter().find_map(|d| d.text.clone()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| word.to_string());

    let mut result = LookupResult::new(query_word);

    for definition in &response.def {
        for translation in definition.tr.iter().take(MAX_TRANSLATIONS_PER_DEF) {
            let Some(mut entry) = translation.text.clone().and_then(TranslationEntry::new) else {
                continue;
            };

            entry.part_of_speech = definition.pos.clone().filter(|p| !p.is_empty());
            entry.synonyms = translation.syn.iter().filter_map(|s| s.text.clone()).collect();

            // only one inline slot; each example overwrites the previous one
            for example in &translation.ex {
                let source = example.text.as_deref().unwrap_or_default();
                let target = example
                    .tr
                    .first()
                    .and_then(|t| t.text.as_deref())
                    .unwrap_or_default();

                entry.example = Some(ExamplePair::new(
                    clean_example_text(source),
                    clean_example_text(target),
                ));
            }

            result.translations.push(entry);
        }
    }

    tracing::debug!(
        "Yandex '{}': {} translations",
        result.query_word,
        result.translations.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "head": {"text": "дом"},
        "def": [{
            "text": "дом",
            "pos": "noun",
            "tr": [
                {
                    "text": "house",
                    "pos": "noun",
                    "syn": [{"text": "home"}, {"text": "building"}, {"pos": "noun"}],
                    "ex": [
                        {"text": "большой дом", "tr": [{"text": "big house"}]},
                        {"text": "мой дом", "tr": [{"text": "my house"}, {"text": "my home"}]}
                    ]
                },
                {"text": "household"},
                {"text": "family"}
            ]
        }]
    }"#;

    #[test]
    fn parses_definition() {
        let result = parse(FIXTURE.as_bytes(), "ljv").unwrap();

        assert_eq!(result.query_word, "дом");
        assert_eq!(result.translations.len(), 3);
        assert!(result.examples.is_empty());

        let house = &result.translations[0];
        assert_eq!(house.text, "house");
        assert_eq!(house.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(house.synonyms, vec!["home", "building"]);
        // the last example wins the inline slot
        assert_eq!(house.example, Some(ExamplePair::new("мой дом", "my house")));

        assert_eq!(result.translations[1].text, "household");
        assert!(result.translations[1].synonyms.is_empty());
        assert_eq!(result.translations[1].example, None);
        assert_eq!(result.translations[2].part_of_speech.as_deref(), Some("noun"));
    }

    #[test]
    fn empty_def() {
        let data = br#"{"head": {}, "def": []}"#;
        assert!(matches!(parse(data, "дом"), Err(ParseError::NoEntry)));
    }

    #[test]
    fn api_error_payload_has_no_entry() {
        let data = br#"{"code": 401, "message": "API key is invalid"}"#;
        assert!(matches!(parse(data, "дом"), Err(ParseError::NoEntry)));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(parse(b"<html>", "дом"), Err(ParseError::MalformedJson(_))));
    }

    #[test]
    fn word_falls_back_to_definition_then_query() {
        let data = r#"{"head": {}, "def": [{"text": "кошка", "tr": [{"text": "cat"}]}]}"#;
        assert_eq!(parse(data.as_bytes(), "q").unwrap().query_word, "кошка");

        let data = br#"{"def": [{"tr": [{"text": "cat"}]}]}"#;
        assert_eq!(parse(data, "кошка").unwrap().query_word, "кошка");
    }

    #[test]
    fn translations_capped_per_definition() {
        let tr: Vec<String> = (0..12).map(|i| format!(r#"{{"text": "t{i}"}}"#)).collect();
        let data = format!(
            r#"{{"def": [{{"text": "a", "tr": [{}]}}, {{"text": "a", "pos": "verb", "tr": [{{"text": "v"}}]}}]}}"#,
            tr.join(",")
        );

        let result = parse(data.as_bytes(), "a").unwrap();

        assert_eq!(result.translations.len(), 11);
        assert_eq!(result.translations[9].text, "t9");
        assert_eq!(result.translations[10].text, "v");
        assert_eq!(result.translations[10].part_of_speech.as_deref(), Some("verb"));
    }

    #[test]
    fn entries_without_text_are_dropped() {
        let data = br#"{"def": [{"text": "a", "tr": [{"pos": "noun"}, {"text": ""}, {"text": "b"}]}]}"#;
        let result = parse(data, "a").unwrap();
        assert_eq!(result.translations.len(), 1);
        assert_eq!(result.translations[0].text, "b");
    }

    #[test]
    fn request_carries_query_parameters() {
        let req = request(
            "https://dictionary.yandex.net/api/v1/dicservice.json/lookup",
            "k3y",
            "ru-en",
            "дом",
        )
        .unwrap();

        let pairs: Vec<(String, String)> = req.url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("key".to_string(), "k3y".to_string()),
                ("lang".to_string(), "ru-en".to_string()),
                ("text".to_string(), "дом".to_string()),
            ]
        );
    }
}
