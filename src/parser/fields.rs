use std::collections::HashMap;

use super::normalize::strip_list_marker;
use crate::error::{DossierError, DossierResult};
use crate::model::NonEmptyText;

/// Split `label: value` on the first colon.
///
/// Labels are lower-cased. Emphasis around the label (`**Gene ID:** G1`,
/// `**Gene ID**: G1`, `*Gene ID:* G1`, `_Organism:_ X`) is dropped. Returns
/// `None` when there is no colon or the label is empty.
pub fn split_label(line: &str) -> Option<(String, &str)> {
    let (raw_label, raw_value) = line.split_once(':')?;
    let lead = raw_label.trim_start();
    let open = &lead[..lead.len() - lead.trim_start_matches(is_emphasis).len()];
    let closed_before_colon = raw_label.trim_end().ends_with(is_emphasis);
    let label = raw_label
        .trim()
        .trim_matches(is_emphasis)
        .trim()
        .to_lowercase();
    if label.is_empty() {
        return None;
    }

    let mut value = raw_value.trim();
    if !open.is_empty() && !closed_before_colon {
        value = value.strip_prefix(open).unwrap_or(value).trim();
    }
    Some((label, value))
}

fn is_emphasis(c: char) -> bool {
    c == '*' || c == '_'
}

/// Label → values for one bulleted `label: value` block.
///
/// Entries keep source order, so repeated labels read back in the order they
/// were written. Empty values are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn first(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first label in `labels` that is present.
    pub fn first_of(&self, labels: &[&str]) -> Option<&str> {
        labels.iter().find_map(|l| self.first(l))
    }

    pub fn text(&self, labels: &[&str]) -> Option<String> {
        self.first_of(labels).map(str::to_string)
    }

    /// Every value under any of `labels`, in source order.
    pub fn all<'a>(&'a self, labels: &'a [&str]) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(|(l, _)| labels.contains(&l.as_str()))
            .map(|(_, v)| v.as_str())
    }

    /// Mandatory value, reported under `labels[0]` when absent.
    pub fn require(&self, labels: &[&str], heading: &str) -> DossierResult<NonEmptyText> {
        self.first_of(labels)
            .and_then(NonEmptyText::new)
            .ok_or_else(|| DossierError::missing_field(heading, labels.first().copied().unwrap_or("")))
    }
}

pub fn parse_key_values(block: &str) -> FieldMap {
    let mut entries = Vec::new();

    for line in block.lines() {
        let line = strip_list_marker(line);
        if line.is_empty() {
            continue;
        }
        let Some((label, value)) = split_label(line) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        entries.push((label, value.to_string()));
    }

    FieldMap { entries }
}

/// One-line `label: value | label: value` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineRecord {
    fields: HashMap<String, String>,
}

impl InlineRecord {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn get_any(&self, labels: &[&str]) -> Option<&str> {
        labels.iter().find_map(|l| self.get(l))
    }

    pub fn text(&self, labels: &[&str]) -> Option<String> {
        self.get_any(labels).map(str::to_string)
    }
}

/// Decode a pipe-delimited record. Later duplicates overwrite earlier ones.
pub fn parse_inline(line: &str) -> InlineRecord {
    let mut fields = HashMap::new();
    for segment in line.split('|') {
        if let Some((label, value)) = split_label(segment) {
            if !value.is_empty() {
                fields.insert(label, value.to_string());
            }
        }
    }
    InlineRecord { fields }
}
