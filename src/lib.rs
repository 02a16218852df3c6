//! Parser for markdown protein dossiers.
//!
//! A dossier is split by heading depth into sections, each section is decoded
//! into typed fragments, and the fragments are assembled into one validated
//! [`KnowledgeDocument`]. Parsing is all-or-nothing: a missing title,
//! mandatory section or mandatory field rejects the document, while malformed
//! single-line citations are dropped.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use config::{ParserConfig, SectionAliases, TopLevel};
pub use error::{DefectKind, DossierError, DossierResult};
pub use model::*;
pub use parser::DossierParser;

/// Parse with the built-in section names.
pub fn parse_document(text: &str) -> DossierResult<KnowledgeDocument> {
    DossierParser::default().parse(text)
}
