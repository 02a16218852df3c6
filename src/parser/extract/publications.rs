use crate::model::{NonEmptyText, Publication};
use crate::parser::fields::{parse_inline, FieldMap, InlineRecord};
use crate::parser::normalize::{list_items, non_blank, parse_integer};
use crate::parser::sections::Section;

const PUBLICATION_LABELS: &[&str] = &["publication", "reference"];

/// Build a publication from a decoded inline record.
///
/// Records without a PMID or a title are citation noise and yield `None`.
pub fn from_record(record: &InlineRecord) -> Option<Publication> {
    let pmid = record.get_any(&["pmid", "pubmed id"]).and_then(|v| NonEmptyText::new(strip_pmid_prefix(v)))?;
    let title = record.get("title").and_then(NonEmptyText::new)?;

    Some(Publication {
        pmid,
        title,
        doi: record.get("doi").and_then(non_blank),
        year: record
            .get("year")
            .and_then(parse_integer)
            .and_then(|y| i32::try_from(y).ok()),
        pmcid: record.get("pmcid").and_then(non_blank).map(|p| p.to_uppercase()),
        journal: record.get("journal").and_then(non_blank),
    })
}

pub fn parse_line(line: &str) -> Option<Publication> {
    let publication = from_record(&parse_inline(line));
    if publication.is_none() {
        tracing::debug!(line, "dropping malformed publication record");
    }
    publication
}

/// Flat bulleted list of inline publication records.
pub fn extract(section: Option<&Section>) -> Vec<Publication> {
    section
        .map(|s| list_items(&s.content).iter().filter_map(|l| parse_line(l)).collect())
        .unwrap_or_default()
}

/// `Publication:` and `Reference:` lines inside a key-value block, in source order.
pub fn from_fields(fields: &FieldMap) -> Vec<Publication> {
    fields.all(PUBLICATION_LABELS).filter_map(parse_line).collect()
}

fn strip_pmid_prefix(value: &str) -> &str {
    let v = value.trim();
    match (v.get(..4), v.get(4..)) {
        (Some(prefix), Some(rest)) if prefix.eq_ignore_ascii_case("pmid") => {
            rest.trim_start_matches(':').trim()
        }
        _ => v,
    }
}
