//! Total value conversions. None of these fail; unusable input maps to `None`
//! (or an empty collection).

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Strand;

static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:[-*+]|\d+\.)(?:\s+|$)").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n\s*").unwrap());
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Trim a line and drop a leading `-`, `*`, `+` or `N.` list marker.
pub fn strip_list_marker(line: &str) -> &str {
    let trimmed = line.trim();
    match LIST_MARKER_RE.find(trimmed) {
        Some(m) => trimmed[m.end()..].trim(),
        None => trimmed,
    }
}

/// `"a, b; c"` → `["a", "b", "c"]`.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Signed integer, ignoring grouping commas, underscores and whitespace.
pub fn parse_integer(value: &str) -> Option<i64> {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
        .collect();
    if !INTEGER_RE.is_match(&cleaned) {
        return None;
    }
    cleaned.parse().ok()
}

pub fn parse_strand(value: &str) -> Option<Strand> {
    match value.trim().to_lowercase().as_str() {
        "-1" | "minus" | "negative" => Some(Strand::Reverse),
        "1" | "+1" | "plus" | "positive" => Some(Strand::Forward),
        _ => None,
    }
}

/// Tri-state flag: unknown tokens stay unknown rather than defaulting to false.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Split on blank-line runs, trim each paragraph and rejoin with a single
/// blank line.
pub fn normalize_paragraphs(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    BLANK_RUN_RE
        .split(&text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// Bulleted or numbered block → items in source order.
pub fn list_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_list_marker)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed, non-empty owned text.
pub fn non_blank(value: &str) -> Option<String> {
    let t = value.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}
