use crate::model::NarrativeBlock;
use crate::parser::normalize::{list_items, normalize_paragraphs};
use crate::parser::sections::{leading_text, Section, SectionIndex};

pub const KEY_FUNCTIONS: &str = "Key Functions";

/// Prose before the first subsection, normalized. Empty when the section is
/// absent or opens directly with a subsection.
pub fn prose(section: Option<&Section>) -> String {
    section
        .map(|s| normalize_paragraphs(&leading_text(&s.content)))
        .unwrap_or_default()
}

/// Prose plus the bullet items of the depth-3 `items_heading` subsection.
pub fn extract(section: Option<&Section>, items_heading: Option<&str>) -> NarrativeBlock {
    let Some(section) = section else {
        return NarrativeBlock::default();
    };

    let items = items_heading
        .and_then(|heading| {
            SectionIndex::build(&section.content, 3)
                .get(heading)
                .map(|s| list_items(&s.content))
        })
        .unwrap_or_default();

    NarrativeBlock {
        text: prose(Some(section)),
        items,
    }
}
