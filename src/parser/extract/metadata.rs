use crate::error::{DossierError, DossierResult};
use crate::model::{Gene, Locus, NonEmptyText, RelatedEntity, Subject};
use crate::parser::fields::{parse_inline, parse_key_values, FieldMap};
use crate::parser::normalize::{list_items, non_blank, parse_integer, parse_strand};
use crate::parser::sections::{Section, SectionIndex};

pub const PROTEIN_SNAPSHOT: &str = "Protein Snapshot";
pub const GENE_PROFILE: &str = "Gene Profile";
pub const RELATED_GENES: &str = "Related Genes";

/// Subject and related genes from the `Metadata` section.
///
/// `Protein Snapshot` and `Gene Profile` are mandatory subsections; their
/// absence is structural, not a field defect.
pub fn extract(section: &Section) -> DossierResult<(Subject, Vec<RelatedEntity>)> {
    let index = SectionIndex::build(&section.content, 3);

    let snapshot = index
        .get(PROTEIN_SNAPSHOT)
        .ok_or_else(|| DossierError::missing_section(PROTEIN_SNAPSHOT))?;
    let profile = index
        .get(GENE_PROFILE)
        .ok_or_else(|| DossierError::missing_section(GENE_PROFILE))?;

    let gene = extract_gene(&parse_key_values(&profile.content))?;
    let subject = extract_subject(&parse_key_values(&snapshot.content), gene)?;
    let related = index.get(RELATED_GENES).map(extract_related).unwrap_or_default();

    Ok((subject, related))
}

fn extract_subject(fields: &FieldMap, gene: Gene) -> DossierResult<Subject> {
    let accession = fields.require(&["uniprot id", "accession"], PROTEIN_SNAPSHOT)?;
    let name = fields.require(&["protein name"], PROTEIN_SNAPSHOT)?;
    let sequence = fields
        .first_of(&["amino acid sequence", "sequence"])
        .map(|s| s.split_whitespace().collect::<String>())
        .and_then(NonEmptyText::new)
        .ok_or_else(|| DossierError::missing_field(PROTEIN_SNAPSHOT, "amino acid sequence"))?;

    Ok(Subject {
        accession,
        name,
        sequence,
        family: fields.text(&["protein family", "family"]),
        structure_model: fields.text(&["structure model", "alphafold id", "pdb id"]),
        gene,
    })
}

fn extract_gene(fields: &FieldMap) -> DossierResult<Gene> {
    let id = fields.require(&["gene id"], GENE_PROFILE)?;
    let symbol = fields.require(&["gene symbol", "symbol"], GENE_PROFILE)?;

    let locus = fields
        .first("organism")
        .and_then(NonEmptyText::new)
        .map(|organism| Locus {
            organism,
            chromosome: fields.first("chromosome").and_then(non_blank),
            start: fields.first_of(&["start", "start position"]).and_then(parse_integer),
            end: fields.first_of(&["end", "end position"]).and_then(parse_integer),
            strand: fields.first("strand").and_then(parse_strand),
        });

    Ok(Gene { id, symbol, locus })
}

fn extract_related(section: &Section) -> Vec<RelatedEntity> {
    list_items(&section.content)
        .iter()
        .filter_map(|line| {
            let record = parse_inline(line);
            let Some(symbol) = record.get("symbol").and_then(NonEmptyText::new) else {
                tracing::debug!(line = line.as_str(), "dropping related gene without symbol");
                return None;
            };
            Some(RelatedEntity {
                symbol,
                name: record.text(&["name"]),
                relationship: record.text(&["relationship"]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strand;

    fn metadata(content: &str) -> Section {
        Section {
            title: "Metadata".into(),
            content: content.into(),
        }
    }

    const FULL: &str = "### Protein Snapshot\n- UniProt ID: Q14697\n- Protein Name: Neutral alpha-glucosidase AB\n- Amino Acid Sequence: MAAVA AVAAR GRSP\n- Protein Family: Glycosyl hydrolase 31\n- AlphaFold ID: AF-Q14697-F1\n\n### Gene Profile\n- Gene ID: ENSG00000089597\n- Gene Symbol: GANAB\n- Organism: Homo sapiens\n- Chromosome: 11\n- Start Position: 62,624,846\n- End Position: 62,646,690\n- Strand: -1\n\n### Related Genes\n- Symbol: PRKCSH | Name: Glucosidase II beta | Relationship: complex partner\n- Name: no symbol here\n- Symbol: MOGS\n";

    #[test]
    fn full_metadata() {
        let (subject, related) = extract(&metadata(FULL)).unwrap();
        assert_eq!(subject.accession, "Q14697");
        assert_eq!(subject.name, "Neutral alpha-glucosidase AB");
        assert_eq!(subject.sequence, "MAAVAAVAARGRSP");
        assert_eq!(subject.family.as_deref(), Some("Glycosyl hydrolase 31"));
        assert_eq!(subject.structure_model.as_deref(), Some("AF-Q14697-F1"));
        assert_eq!(subject.gene.symbol, "GANAB");
        let locus = subject.gene.locus.unwrap();
        assert_eq!(locus.organism, "Homo sapiens");
        assert_eq!(locus.chromosome.as_deref(), Some("11"));
        assert_eq!(locus.start, Some(62_624_846));
        assert_eq!(locus.end, Some(62_646_690));
        assert_eq!(locus.strand, Some(Strand::Reverse));

        assert_eq!(related.len(), 2);
        assert_eq!(related[0].symbol, "PRKCSH");
        assert_eq!(related[0].relationship.as_deref(), Some("complex partner"));
        assert_eq!(related[1].symbol, "MOGS");
        assert_eq!(related[1].name, None);
    }

    #[test]
    fn locus_absent_without_organism() {
        let md = "### Protein Snapshot\n- UniProt ID: Q1\n- Protein Name: X\n- Amino Acid Sequence: MK\n### Gene Profile\n- Gene ID: G1\n- Gene Symbol: X\n- Chromosome: 11";
        let (subject, related) = extract(&metadata(md)).unwrap();
        assert!(subject.gene.locus.is_none());
        assert!(related.is_empty());
    }

    #[test]
    fn missing_gene_profile_is_structural() {
        let md = "### Protein Snapshot\n- UniProt ID: Q1\n- Protein Name: X\n- Amino Acid Sequence: MK";
        let err = extract(&metadata(md)).unwrap_err();
        assert_eq!(err, DossierError::MissingSection { section: "Gene Profile".into() });
    }

    #[test]
    fn missing_sequence_is_field_defect() {
        let md = "### Protein Snapshot\n- UniProt ID: Q1\n- Protein Name: X\n### Gene Profile\n- Gene ID: G1\n- Gene Symbol: X";
        let err = extract(&metadata(md)).unwrap_err();
        assert_eq!(
            err,
            DossierError::MissingField {
                heading: "Protein Snapshot".into(),
                field: "amino acid sequence".into()
            }
        );
    }
}
