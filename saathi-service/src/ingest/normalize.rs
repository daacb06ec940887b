use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

/// Unify line endings, collapse runs of blank lines to one, trim.
pub fn normalize_text(text: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    EXCESS_NEWLINES
        .replace_all(&unix, "\n\n")
        .trim()
        .to_string()
}

/// Characters that carry content; used by the scanned-PDF heuristic.
pub fn significant_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
