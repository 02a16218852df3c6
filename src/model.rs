//! Typed knowledge record produced by the dossier parser.
//!
//! Every value here is built in one parse call and never mutated afterwards.
//! Mandatory text fields use [`NonEmptyText`], so a record cannot exist
//! without them.

use serde::{Deserialize, Serialize};

const EUROPE_PMC_ARTICLE_URL: &str = "https://europepmc.org/article";

/// A string that is guaranteed to hold at least one non-whitespace character.
///
/// The input is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Returns `None` when the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Option<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for NonEmptyText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).ok_or_else(|| serde::de::Error::custom("text cannot be empty"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Reverse,
}

/// Genomic placement of the gene. Present only when the organism is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locus {
    pub organism: NonEmptyText,
    pub chromosome: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub strand: Option<Strand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub id: NonEmptyText,
    pub symbol: NonEmptyText,
    pub locus: Option<Locus>,
}

/// The protein/gene pair a dossier describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub accession: NonEmptyText,
    pub name: NonEmptyText,
    pub sequence: NonEmptyText,
    pub family: Option<String>,
    pub structure_model: Option<String>,
    pub gene: Gene,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedEntity {
    pub symbol: NonEmptyText,
    pub name: Option<String>,
    pub relationship: Option<String>,
}

/// Free prose plus optional short bullet items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeBlock {
    pub text: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralDescription {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub quaternary: Option<String>,
    pub domains: Vec<String>,
    pub modifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub pmid: NonEmptyText,
    pub title: NonEmptyText,
    pub doi: Option<String>,
    pub year: Option<i32>,
    pub pmcid: Option<String>,
    pub journal: Option<String>,
}

impl Publication {
    /// Europe PMC landing page, preferring the open-access PMC record.
    pub fn source_url(&self) -> String {
        match &self.pmcid {
            Some(pmcid) => format!("{}/PMC/{}", EUROPE_PMC_ARTICLE_URL, pmcid),
            None => format!("{}/MED/{}", EUROPE_PMC_ARTICLE_URL, self.pmid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    pub location: NonEmptyText,
    pub kind: NonEmptyText,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalImpact {
    pub description: NonEmptyText,
    pub kind: NonEmptyText,
    pub pathway: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationHotspot {
    pub heading: String,
    pub modification: Modification,
    pub function: FunctionalImpact,
    pub publications: Vec<Publication>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalCondition {
    pub name: NonEmptyText,
    pub variant_location: Option<String>,
    pub variant_type: Option<String>,
    pub phenotype: NonEmptyText,
    pub age_related: Option<bool>,
    pub onset_age: Option<String>,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallMoleculeInteraction {
    pub name: NonEmptyText,
    pub pubchem_cid: Option<String>,
    pub chembl_id: Option<String>,
    pub smiles: Option<String>,
    pub interaction_type: NonEmptyText,
    pub binding_site: Option<String>,
    pub ic50: Option<String>,
    pub kd: Option<String>,
    pub effect: Option<String>,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinPartnerInteraction {
    pub accession: NonEmptyText,
    pub name: NonEmptyText,
    pub interaction_type: NonEmptyText,
    pub complex: Option<String>,
    pub publications: Vec<Publication>,
}

/// The fully parsed, validated dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub title: NonEmptyText,
    pub subject: Subject,
    pub related_genes: Vec<RelatedEntity>,
    pub overview: NarrativeBlock,
    pub structure: StructuralDescription,
    pub functional: NarrativeBlock,
    pub hotspots: Vec<ModificationHotspot>,
    pub clinical: NarrativeBlock,
    pub conditions: Vec<ClinicalCondition>,
    pub small_molecules: Vec<SmallMoleculeInteraction>,
    pub protein_partners: Vec<ProteinPartnerInteraction>,
    pub references: Vec<Publication>,
}

impl KnowledgeDocument {
    /// Catalog accession of the subject protein.
    pub fn id(&self) -> &str {
        self.subject.accession.as_str()
    }
}
