pub mod extract;
pub mod fields;
pub mod normalize;
pub mod sections;

use crate::config::ParserConfig;
use crate::error::{DossierError, DossierResult};
use crate::model::{KnowledgeDocument, NonEmptyText};
use sections::{split_sections, SectionIndex};

/// Three-step pipeline: title → top-level section index → extracted record.
///
/// Holds only immutable configuration, so one parser can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct DossierParser {
    config: ParserConfig,
}

impl DossierParser {
    pub fn new(config: ParserConfig) -> Self {
        DossierParser { config }
    }

    /// Parse one dossier. Either the whole record is returned or the first
    /// structural/field defect encountered.
    pub fn parse(&self, text: &str) -> DossierResult<KnowledgeDocument> {
        let mut titles = split_sections(text, 1);
        let root = match titles.len() {
            0 => return Err(DossierError::MissingTitle),
            1 => titles.remove(0),
            count => return Err(DossierError::MultipleTitles { count }),
        };
        let title = NonEmptyText::new(&root.title).ok_or(DossierError::MissingTitle)?;

        let index = SectionIndex::build(&root.content, 2);
        let doc = extract::extract_all(title, &index, &self.config)?;

        tracing::debug!(
            title = doc.title.as_str(),
            accession = doc.id(),
            hotspots = doc.hotspots.len(),
            conditions = doc.conditions.len(),
            small_molecules = doc.small_molecules.len(),
            partners = doc.protein_partners.len(),
            references = doc.references.len(),
            "parsed dossier"
        );
        Ok(doc)
    }
}
