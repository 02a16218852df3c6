use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)(?:\s+#+)?\s*$").unwrap());

/// One heading and everything under it up to the next sibling heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    fn new(title: &str, body: &[&str]) -> Self {
        Section {
            title: title.trim().to_string(),
            content: body.join("\n").trim().to_string(),
        }
    }
}

/// Returns `(depth, text)` when the line is an ATX heading. Closing hashes
/// are not part of the text.
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line.trim())?;
    let depth = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some((depth, text))
}

fn is_fence(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("```") || t.starts_with("~~~")
}

/// Split `text` into the sections whose heading sits at exactly `depth`.
///
/// Deeper headings stay inside `content` for a later split. A shallower
/// heading closes the open section. Text before the first matching heading
/// belongs to no section. Headings inside fenced code are ignored.
pub fn split_sections(text: &str, depth: usize) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(&str, Vec<&str>)> = None;
    let mut in_fence = false;

    for line in text.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
        }
        let level = if in_fence { None } else { heading(line) };

        match level {
            Some((d, title)) if d == depth => {
                if let Some((t, body)) = current.take() {
                    sections.push(Section::new(t, &body));
                }
                current = Some((title, Vec::new()));
            }
            Some((d, _)) if d < depth => {
                if let Some((t, body)) = current.take() {
                    sections.push(Section::new(t, &body));
                }
            }
            _ => {
                if let Some((_, body)) = current.as_mut() {
                    body.push(line);
                }
            }
        }
    }

    if let Some((t, body)) = current {
        sections.push(Section::new(t, &body));
    }

    tracing::trace!(depth, count = sections.len(), "split sections");
    sections
}

/// Prose that precedes the first heading of any depth, trimmed.
pub fn leading_text(content: &str) -> String {
    let mut lines = Vec::new();
    let mut in_fence = false;
    for line in content.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
        }
        if !in_fence && heading(line).is_some() {
            break;
        }
        lines.push(line);
    }
    lines.join("\n").trim().to_string()
}

/// Ordered, read-only title lookup over the sections of one depth.
///
/// Built once per parse and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct SectionIndex {
    sections: Vec<Section>,
}

impl SectionIndex {
    pub fn build(text: &str, depth: usize) -> Self {
        SectionIndex {
            sections: split_sections(text, depth),
        }
    }

    /// First section whose title matches exactly.
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// First section, in document order, whose title is any of `titles`.
    pub fn find_any<S: AsRef<str>>(&self, titles: &[S]) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| titles.iter().any(|t| t.as_ref() == s.title))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
