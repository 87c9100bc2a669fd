use std::fmt::Write;

use ruen_types::LookupResult;

use super::MAX_EXAMPLES;
use super::clean::escape_html;

/// Shown instead of an empty translation list
pub const NO_TRANSLATIONS_RICH: &str = "<p><i>No translations found.</i></p>";

const HEADING_STYLE: &str = "color: red;";
const SECTION_STYLE: &str = "color: #2E86AB; background-color: #f0f0f0; padding: 5px;";

/// Render the in-app display document.
///
/// Upstream example sentences carry their own inline markup and are emitted
/// as-is, everything else is escaped.
pub fn render_rich(result: &LookupResult) -> String {
    if result.translations.is_empty() {
        return NO_TRANSLATIONS_RICH.to_string();
    }

    let mut out = String::new();

    let _ = write!(
        out,
        "<h2 style='{HEADING_STYLE}'>{}</h2>",
        escape_html(&result.query_word)
    );
    let _ = write!(out, "<h3 style='{SECTION_STYLE}'>Translations</h3><ul>");

    for (index, entry) in result.translations.iter().enumerate() {
        let _ = write!(out, "<li><b>{}</b> - {}", index + 1, escape_html(&entry.text));

        if let Some(pos) = &entry.part_of_speech {
            let _ = write!(out, " <i>({})</i>", escape_html(pos));
        }

        if let Some(example) = &entry.example {
            let _ = write!(
                out,
                "<br><i>Example: {} - {}</i>",
                example.source_text, example.target_text
            );
        }

        if !entry.synonyms.is_empty() {
            let synonyms: Vec<String> = entry.synonyms.iter().map(|s| escape_html(s)).collect();
            let _ = write!(out, "<br><i>Synonyms: {}</i>", synonyms.join(", "));
        }

        out.push_str("</li>");
    }
    out.push_str("</ul>");

    if !result.examples.is_empty() {
        let _ = write!(out, "<h3 style='{SECTION_STYLE}'>Examples</h3><ul>");

        for pair in result.examples.iter().take(MAX_EXAMPLES) {
            let _ = write!(
                out,
                "<li><b>Russian:</b> {}<br><b>English:</b> {}</li>",
                pair.source_text, pair.target_text
            );
        }
        out.push_str("</ul>");
    }

    out
}

#[cfg(test)]
mod tests {
    use ruen_types::{ExamplePair, TranslationEntry};

    use super::*;

    fn entry(text: &str) -> TranslationEntry {
        TranslationEntry::new(text).unwrap()
    }

    #[test]
    fn full_document() {
        let mut first = entry("cat");
        first.part_of_speech = Some("noun".to_string());
        first.example = Some(ExamplePair::new("Кот спит.", "The cat sleeps."));
        let mut second = entry("tomcat");
        second.synonyms = vec!["tom".to_string(), "male cat".to_string()];

        let result = LookupResult {
            query_word: "кот".to_string(),
            translations: vec![first, second],
            examples: vec![ExamplePair::new("Это <b>кот</b>.", "This is a cat.")],
        };

        let html = render_rich(&result);

        assert!(html.starts_with("<h2 style='color: red;'>кот</h2>"));
        assert!(html.contains("<li><b>1</b> - cat <i>(noun)</i><br><i>Example: Кот спит. - The cat sleeps.</i></li>"));
        assert!(html.contains("<li><b>2</b> - tomcat<br><i>Synonyms: tom, male cat</i></li>"));
        assert!(html.contains("<li><b>Russian:</b> Это <b>кот</b>.<br><b>English:</b> This is a cat.</li>"));
        assert!(!html.contains('\n'));
    }

    #[test]
    fn examples_section_omitted_when_empty() {
        let result = LookupResult {
            query_word: "да".to_string(),
            translations: vec![entry("yes")],
            examples: vec![],
        };

        assert!(!render_rich(&result).contains("Examples"));
    }

    #[test]
    fn examples_capped() {
        let result = LookupResult {
            query_word: "да".to_string(),
            translations: vec![entry("yes")],
            examples: (0..15)
                .map(|i| ExamplePair::new(format!("ru{i}"), format!("en{i}")))
                .collect(),
        };

        let html = render_rich(&result);
        assert_eq!(html.matches("<b>Russian:</b>").count(), 10);
        assert!(html.contains("ru9"));
        assert!(!html.contains("ru10"));
    }
}
