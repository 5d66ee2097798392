use std::sync::LazyLock;

use regex::Regex;

static TRAILING_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static SECTION_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Normalizes raw text: unifies line endings, strips trailing blanks from each
/// line, collapses runs of blank lines to a single paragraph break, and trims
/// the ends. Idempotent and total over all inputs.
pub fn clean(text: &str) -> String {
    let unified = text.replace("\r\n", "\n");
    let stripped = TRAILING_BLANKS.replace_all(&unified, "\n");
    let collapsed = EXCESS_NEWLINES.replace_all(&stripped, "\n\n");
    collapsed.trim().to_string()
}

/// Splits cleaned text into sections on blank-line boundaries. A line holding
/// only whitespace counts as blank. Segments that trim to nothing are dropped;
/// the rest keep their original order.
pub fn split_sections(text: &str) -> Vec<String> {
    SECTION_BREAK
        .split(text)
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(str::to_string)
        .collect()
}
