/// Severity class of a rejected dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    /// The document skeleton is broken: no title, or a mandatory section is absent.
    Structural,
    /// An author-chosen group is present but lacks one of its own mandatory fields.
    Field,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DossierError {
    #[error("document has no title heading")]
    MissingTitle,
    #[error("document has {count} title headings, expected exactly one")]
    MultipleTitles { count: usize },
    #[error("mandatory section `{section}` is missing")]
    MissingSection { section: String },
    #[error("`{heading}` is missing mandatory field `{field}`")]
    MissingField { heading: String, field: String },
}

impl DossierError {
    pub fn kind(&self) -> DefectKind {
        match self {
            DossierError::MissingTitle
            | DossierError::MultipleTitles { .. }
            | DossierError::MissingSection { .. } => DefectKind::Structural,
            DossierError::MissingField { .. } => DefectKind::Field,
        }
    }

    pub(crate) fn missing_section(section: impl Into<String>) -> Self {
        DossierError::MissingSection {
            section: section.into(),
        }
    }

    pub(crate) fn missing_field(heading: impl Into<String>, field: impl Into<String>) -> Self {
        DossierError::MissingField {
            heading: heading.into(),
            field: field.into(),
        }
    }
}

pub type DossierResult<T> = Result<T, DossierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(DossierError::MissingTitle.kind(), DefectKind::Structural);
        assert_eq!(
            DossierError::missing_section("Gene Profile").kind(),
            DefectKind::Structural
        );
        assert_eq!(
            DossierError::missing_field("Ser456", "type").kind(),
            DefectKind::Field
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let e = DossierError::missing_field("Ser456 phosphorylation", "type");
        assert_eq!(
            e.to_string(),
            "`Ser456 phosphorylation` is missing mandatory field `type`"
        );
        let e = DossierError::missing_section("Gene Profile");
        assert!(e.to_string().contains("Gene Profile"));
    }
}
