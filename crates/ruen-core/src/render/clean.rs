use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

static BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(li|h[1-6]|ul|ol|p|div)>").expect("valid block pattern")
});

const SUMMARY_CHARS: usize = 100;

/// Drop anything that looks like a markup tag
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs into single spaces and trim the ends
pub fn simplify(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Example text as it goes into Markdown
pub fn clean_example_text(text: &str) -> String {
    simplify(&strip_tags(text).replace("&#x27;", "'"))
}

/// Escape text taken from upstream data before it goes into rich markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// First 100 chars of a rich rendering with markup stripped and entities decoded
pub fn short_summary(rendering: &str) -> String {
    decode_entities(&strip_tags(rendering))
        .chars()
        .take(SUMMARY_CHARS)
        .collect()
}

/// Rich markup reduced to plain text, one block per line
pub fn rich_to_plain(rendering: &str) -> String {
    let with_breaks = BLOCK_END.replace_all(rendering, "\n");
    let plain = decode_entities(&strip_tags(&with_breaks));

    plain
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Make a value safe for one pipe-delimited history record
pub fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .filter(|&ch| ch != '|')
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect()
}
