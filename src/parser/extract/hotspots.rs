use super::{entries, publications};
use crate::error::DossierResult;
use crate::model::{FunctionalImpact, Modification, ModificationHotspot};
use crate::parser::fields::parse_key_values;
use crate::parser::sections::Section;

pub const MODULATION_HOTSPOTS: &str = "Modulation Hotspots";

/// Every depth-4 entry under `Modulation Hotspots`. One incomplete entry
/// rejects the whole list.
pub fn extract(section: Option<&Section>) -> DossierResult<Vec<ModificationHotspot>> {
    entries(section, MODULATION_HOTSPOTS)
        .iter()
        .map(extract_one)
        .collect()
}

fn extract_one(entry: &Section) -> DossierResult<ModificationHotspot> {
    let heading = entry.title.as_str();
    let fields = parse_key_values(&entry.content);

    let modification = Modification {
        location: fields.require(&["location"], heading)?,
        kind: fields.require(&["type", "modification type"], heading)?,
        description: fields.text(&["description"]),
    };
    let function = FunctionalImpact {
        description: fields.require(&["function", "function description"], heading)?,
        kind: fields.require(&["function type"], heading)?,
        pathway: fields.text(&["pathway"]),
    };

    Ok(ModificationHotspot {
        heading: heading.to_string(),
        modification,
        function,
        publications: publications::from_fields(&fields),
        notes: fields.text(&["evidence", "notes"]),
    })
}
