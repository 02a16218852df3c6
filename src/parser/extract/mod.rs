pub mod conditions;
pub mod hotspots;
pub mod interactions;
pub mod metadata;
pub mod narrative;
pub mod publications;
pub mod structure;

use super::sections::{split_sections, Section, SectionIndex};
use crate::config::{ParserConfig, TopLevel};
use crate::error::{DossierError, DossierResult};
use crate::model::{KnowledgeDocument, NonEmptyText};

/// Depth-4 entries under the depth-3 `group` heading of `section`.
pub(crate) fn entries(section: Option<&Section>, group: &str) -> Vec<Section> {
    section
        .and_then(|s| {
            SectionIndex::build(&s.content, 3)
                .get(group)
                .map(|g| split_sections(&g.content, 4))
        })
        .unwrap_or_default()
}

/// Run every sub-extractor over the top-level sections and assemble the record.
///
/// Sections are independent of each other; only `Metadata` must be present.
pub fn extract_all(
    title: NonEmptyText,
    index: &SectionIndex,
    config: &ParserConfig,
) -> DossierResult<KnowledgeDocument> {
    let find = |part: TopLevel| index.find_any(&config.titles(part));

    let metadata = find(TopLevel::Metadata)
        .ok_or_else(|| DossierError::missing_section(TopLevel::Metadata.canonical()))?;
    let (subject, related_genes) = metadata::extract(metadata)?;

    let functional = find(TopLevel::Functional);
    let clinical = find(TopLevel::Clinical);
    let interactions = find(TopLevel::Interactions);

    Ok(KnowledgeDocument {
        title,
        subject,
        related_genes,
        overview: narrative::extract(find(TopLevel::Overview), Some(narrative::KEY_FUNCTIONS)),
        structure: structure::extract(find(TopLevel::Structure)),
        functional: narrative::extract(functional, None),
        hotspots: hotspots::extract(functional)?,
        clinical: narrative::extract(clinical, None),
        conditions: conditions::extract(clinical)?,
        small_molecules: interactions::extract_small_molecules(interactions)?,
        protein_partners: interactions::extract_partners(interactions)?,
        references: publications::extract(find(TopLevel::References)),
    })
}
