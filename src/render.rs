//! Canonical markdown for the `Metadata` and `Reference Corpus` sections.
//!
//! Output re-parses to an equal subject, related-gene list and publication
//! list. Other sections carry free prose and are not rendered.

use crate::config::TopLevel;
use crate::model::{KnowledgeDocument, Publication, RelatedEntity, Strand, Subject};
use crate::parser::extract::metadata::{GENE_PROFILE, PROTEIN_SNAPSHOT, RELATED_GENES};

fn field(out: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(v) = value {
        out.push(format!("- {}: {}", label, v));
    }
}

fn inline(pairs: &[(&str, Option<String>)]) -> String {
    pairs
        .iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn strand_token(strand: Strand) -> &'static str {
    match strand {
        Strand::Forward => "1",
        Strand::Reverse => "-1",
    }
}

fn subject_lines(subject: &Subject) -> Vec<String> {
    let mut out = vec![format!("### {}", PROTEIN_SNAPSHOT)];
    field(&mut out, "UniProt ID", Some(subject.accession.as_str()));
    field(&mut out, "Protein Name", Some(subject.name.as_str()));
    field(&mut out, "Amino Acid Sequence", Some(subject.sequence.as_str()));
    field(&mut out, "Protein Family", subject.family.as_deref());
    field(&mut out, "Structure Model", subject.structure_model.as_deref());

    out.push(String::new());
    out.push(format!("### {}", GENE_PROFILE));
    let gene = &subject.gene;
    field(&mut out, "Gene ID", Some(gene.id.as_str()));
    field(&mut out, "Gene Symbol", Some(gene.symbol.as_str()));
    if let Some(locus) = &gene.locus {
        field(&mut out, "Organism", Some(locus.organism.as_str()));
        field(&mut out, "Chromosome", locus.chromosome.as_deref());
        field(&mut out, "Start", locus.start.map(|v| v.to_string()).as_deref());
        field(&mut out, "End", locus.end.map(|v| v.to_string()).as_deref());
        field(&mut out, "Strand", locus.strand.map(strand_token));
    }
    out
}

fn related_line(entity: &RelatedEntity) -> String {
    inline(&[
        ("Symbol", Some(entity.symbol.to_string())),
        ("Name", entity.name.clone()),
        ("Relationship", entity.relationship.clone()),
    ])
}

pub fn publication_line(publication: &Publication) -> String {
    inline(&[
        ("PMID", Some(publication.pmid.to_string())),
        ("Title", Some(publication.title.to_string())),
        ("DOI", publication.doi.clone()),
        ("Year", publication.year.map(|y| y.to_string())),
        ("PMCID", publication.pmcid.clone()),
        ("Journal", publication.journal.clone()),
    ])
}

pub fn metadata_section(doc: &KnowledgeDocument) -> String {
    let mut out = vec![format!("## {}", TopLevel::Metadata.canonical()), String::new()];
    out.extend(subject_lines(&doc.subject));
    if !doc.related_genes.is_empty() {
        out.push(String::new());
        out.push(format!("### {}", RELATED_GENES));
        out.extend(doc.related_genes.iter().map(|r| format!("- {}", related_line(r))));
    }
    out.join("\n")
}

pub fn reference_section(publications: &[Publication]) -> String {
    let mut out = vec![format!("## {}", TopLevel::References.canonical()), String::new()];
    out.extend(publications.iter().map(|p| format!("- {}", publication_line(p))));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.md", name)).unwrap()
    }

    #[test]
    fn metadata_and_references_round_trip() {
        for name in ["sirt6", "ganab"] {
            let doc = parse_document(&fixture(name)).unwrap();
            let rendered = format!(
                "# {}\n\n{}\n\n{}\n",
                doc.title,
                metadata_section(&doc),
                reference_section(&doc.references)
            );
            let again = parse_document(&rendered).unwrap();
            assert_eq!(again.subject, doc.subject, "{}", name);
            assert_eq!(again.related_genes, doc.related_genes, "{}", name);
            assert_eq!(again.references, doc.references, "{}", name);
        }
    }

    #[test]
    fn publication_line_skips_absent_fields() {
        let doc = parse_document(&fixture("sirt6")).unwrap();
        assert_eq!(
            publication_line(&doc.references[2]),
            "PMID: 27990019 | Title: Lamin A is an endogenous SIRT6 activator | PMCID: PMC5340159"
        );
    }

    #[test]
    fn canonical_metadata_text() {
        let doc = parse_document(&fixture("sirt6")).unwrap();
        let text = metadata_section(&doc);
        assert!(text.starts_with("## Metadata\n\n### Protein Snapshot\n- UniProt ID: Q8N6T7\n"));
        assert!(text.contains("- Start: 4174109\n- End: 4182596\n- Strand: -1"));
        assert!(text.ends_with("- Symbol: LMNA | Name: Prelamin-A/C | Relationship: activity modulator"));
    }
}
