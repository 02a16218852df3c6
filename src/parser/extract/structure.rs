use crate::model::StructuralDescription;
use crate::parser::normalize::{list_items, normalize_paragraphs, split_list, strip_list_marker};
use crate::parser::sections::{Section, SectionIndex};

pub fn extract(section: Option<&Section>) -> StructuralDescription {
    let Some(section) = section else {
        return StructuralDescription::default();
    };
    let index = SectionIndex::build(&section.content, 3);

    let prose = |title: &str| {
        index
            .get(title)
            .map(|s| normalize_paragraphs(&s.content))
            .filter(|t| !t.is_empty())
    };
    let items = |title: &str| index.get(title).map(|s| labels(&s.content)).unwrap_or_default();

    StructuralDescription {
        primary: prose("Primary Structure"),
        secondary: prose("Secondary Structure"),
        tertiary: prose("Tertiary Structure"),
        quaternary: prose("Quaternary Structure"),
        domains: items("Domains"),
        modifications: items("Post-translational Modifications"),
    }
}

/// Bulleted lines, or a single comma/semicolon separated line.
fn labels(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    match lines.as_slice() {
        [only] if strip_list_marker(only) == only.trim() => split_list(only),
        _ => list_items(content),
    }
}
