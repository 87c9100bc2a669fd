//! Turning a `LookupResult` into display and export text.
//!
//! Both renderers are pure. Timestamps are the caller's business.

use ruen_types::LookupResult;

pub mod clean;
pub mod markdown;
pub mod rich;

pub use markdown::{NO_TRANSLATIONS_MARKDOWN, render_history_markdown, render_markdown};
pub use rich::{NO_TRANSLATIONS_RICH, render_rich};

/// Top-level examples shown per result
pub const MAX_EXAMPLES: usize = 10;

/// Both renderings of one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub rich: String,
    pub markdown: String,
}

impl Rendered {
    pub fn from_result(result: &LookupResult) -> Self {
        Self {
            rich: render_rich(result),
            markdown: render_markdown(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use ruen_types::{ExamplePair, TranslationEntry};

    use super::*;

    fn result_with(texts: &[&str]) -> LookupResult {
        LookupResult {
            query_word: "слово".to_string(),
            translations: texts
                .iter()
                .filter_map(|t| TranslationEntry::new(*t))
                .collect(),
            examples: vec![ExamplePair::new("пример", "example")],
        }
    }

    #[test]
    fn empty_translations_give_fixed_document() {
        let with_examples = result_with(&[]);
        let mut without_examples = with_examples.clone();
        without_examples.examples.clear();

        for result in [&with_examples, &without_examples] {
            assert_eq!(render_rich(result), NO_TRANSLATIONS_RICH);
            assert_eq!(render_markdown(result), NO_TRANSLATIONS_MARKDOWN);
        }
    }

    #[test]
    fn markdown_numbering_is_contiguous() {
        // empty candidates never become entries, so numbering cannot skip
        let result = result_with(&["one", "", "two", "", "", "three"]);
        let markdown = render_markdown(&result);

        let labels: Vec<usize> = markdown
            .lines()
            .filter_map(|line| line.strip_prefix("**"))
            .filter_map(|rest| rest.split_once(". "))
            .filter_map(|(n, _)| n.parse().ok())
            .collect();

        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let result = result_with(&["one", "two"]);
        assert_eq!(Rendered::from_result(&result), Rendered::from_result(&result));
    }
}
