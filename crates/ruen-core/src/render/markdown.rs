use std::fmt::Write;

use ruen_types::{HistoryEntry, LookupResult};

use super::MAX_EXAMPLES;
use super::clean::{clean_example_text, rich_to_plain};

/// Shown instead of an empty translation list
pub const NO_TRANSLATIONS_MARKDOWN: &str = "_No translations found._\n";

/// Render the clipboard export. Same content and ordering as the rich document.
pub fn render_markdown(result: &LookupResult) -> String {
    if result.translations.is_empty() {
        return NO_TRANSLATIONS_MARKDOWN.to_string();
    }

    let mut out = String::new();

    let _ = write!(out, "# {}\n\n", result.query_word);
    out.push_str("## Translations\n\n");

    for (index, entry) in result.translations.iter().enumerate() {
        let _ = write!(out, "**{}. {}**", index + 1, entry.text);

        if let Some(pos) = &entry.part_of_speech {
            let _ = write!(out, " _({pos})_");
        }

        if let Some(example) = &entry.example {
            let _ = write!(
                out,
                "\n   *Example: {} → {}*",
                clean_example_text(&example.source_text),
                clean_example_text(&example.target_text)
            );
        }

        if !entry.synonyms.is_empty() {
            let _ = write!(out, "\n   *Synonyms: {}*", entry.synonyms.join(", "));
        }

        out.push_str("\n\n");
    }

    if !result.examples.is_empty() {
        out.push_str("## Examples\n\n");

        for pair in result.examples.iter().take(MAX_EXAMPLES) {
            let _ = writeln!(out, "* **Russian:** {}", clean_example_text(&pair.source_text));
            let _ = write!(
                out,
                "  **English:** {}\n\n",
                clean_example_text(&pair.target_text)
            );
        }
    }

    out
}

/// Markdown export of a stored history entry, built from its saved rich rendering
pub fn render_history_markdown(entry: &HistoryEntry) -> String {
    let mut out = String::from("# History Lookup\n\n");
    let _ = write!(out, "## {}\n\n", entry.word);

    let body: Vec<String> = rich_to_plain(&entry.full_rendering)
        .lines()
        .map(|line| match line {
            "Translations" | "Examples" => format!("**{line}**"),
            other => other.to_string(),
        })
        .collect();

    out.push_str(&body.join("\n"));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use ruen_types::{ExamplePair, TranslationEntry};

    use super::*;

    #[test]
    fn document_layout() {
        let mut entry = TranslationEntry::new("cat").unwrap();
        entry.part_of_speech = Some("noun".to_string());
        entry.example = Some(ExamplePair::new("<b>Кот</b>  спит", "The cat&#x27;s asleep"));

        let result = LookupResult {
            query_word: "кот".to_string(),
            translations: vec![entry],
            examples: vec![ExamplePair::new(" Это  <i>кот</i>. ", "It&#x27;s a cat.")],
        };

        assert_eq!(
            render_markdown(&result),
            "# кот\n\n\
             ## Translations\n\n\
             **1. cat** _(noun)_\n   *Example: Кот спит → The cat's asleep*\n\n\
             ## Examples\n\n\
             * **Russian:** Это кот.\n  **English:** It's a cat.\n\n"
        );
    }

    #[test]
    fn stored_result_is_not_cleaned() {
        let result = LookupResult {
            query_word: "кот".to_string(),
            translations: vec![TranslationEntry::new("cat").unwrap()],
            examples: vec![ExamplePair::new("<b>Кот</b>", "cat")],
        };
        let before = result.clone();

        render_markdown(&result);

        assert_eq!(result, before);
    }

    #[test]
    fn history_export() {
        let entry = HistoryEntry {
            timestamp: "2024-05-01 10:00:00".to_string(),
            word: "кот".to_string(),
            full_rendering: "<h2 style='color: red;'>кот</h2><h3 style='x'>Translations</h3><ul><li><b>1</b> - cat</li></ul><h3 style='x'>Examples</h3><ul><li><b>Russian:</b> Кот<br><b>English:</b> Cat</li></ul>".to_string(),
            short_summary: String::new(),
        };

        assert_eq!(
            render_history_markdown(&entry),
            "# History Lookup\n\n## кот\n\nкот\n**Translations**\n1 - cat\n**Examples**\nRussian: Кот\nEnglish: Cat\n"
        );
    }
}
