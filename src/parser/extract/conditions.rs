use super::{entries, publications};
use crate::error::{DossierError, DossierResult};
use crate::model::{ClinicalCondition, NonEmptyText};
use crate::parser::fields::parse_key_values;
use crate::parser::normalize::parse_flag;
use crate::parser::sections::Section;

pub const CONDITIONS: &str = "Conditions";

pub fn extract(section: Option<&Section>) -> DossierResult<Vec<ClinicalCondition>> {
    entries(section, CONDITIONS).iter().map(extract_one).collect()
}

fn extract_one(entry: &Section) -> DossierResult<ClinicalCondition> {
    let heading = entry.title.as_str();
    let fields = parse_key_values(&entry.content);

    // An explicit `Condition:` overrides the heading.
    let name = NonEmptyText::new(fields.first("condition").unwrap_or(heading))
        .ok_or_else(|| DossierError::missing_field(heading, "condition"))?;

    Ok(ClinicalCondition {
        name,
        variant_location: fields.text(&["variant location"]),
        variant_type: fields.text(&["variant type"]),
        phenotype: fields.require(&["phenotype"], heading)?,
        age_related: fields.first_of(&["age related", "age-related"]).and_then(parse_flag),
        onset_age: fields.text(&["onset age", "age of onset"]),
        publications: publications::from_fields(&fields),
    })
}
