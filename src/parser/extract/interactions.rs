use super::{entries, publications};
use crate::error::{DossierError, DossierResult};
use crate::model::{NonEmptyText, ProteinPartnerInteraction, SmallMoleculeInteraction};
use crate::parser::fields::parse_key_values;
use crate::parser::sections::Section;

pub const SMALL_MOLECULES: &str = "Small Molecules";
pub const PROTEIN_PARTNERS: &str = "Protein Partners";

pub fn extract_small_molecules(section: Option<&Section>) -> DossierResult<Vec<SmallMoleculeInteraction>> {
    entries(section, SMALL_MOLECULES).iter().map(small_molecule).collect()
}

pub fn extract_partners(section: Option<&Section>) -> DossierResult<Vec<ProteinPartnerInteraction>> {
    entries(section, PROTEIN_PARTNERS).iter().map(partner).collect()
}

fn heading_name(entry: &Section) -> DossierResult<NonEmptyText> {
    NonEmptyText::new(&entry.title).ok_or_else(|| DossierError::missing_field(&entry.title, "name"))
}

fn small_molecule(entry: &Section) -> DossierResult<SmallMoleculeInteraction> {
    let heading = entry.title.as_str();
    let fields = parse_key_values(&entry.content);

    Ok(SmallMoleculeInteraction {
        name: heading_name(entry)?,
        pubchem_cid: fields.text(&["pubchem cid", "pubchem id"]),
        chembl_id: fields.text(&["chembl id"]),
        smiles: fields.text(&["smiles"]),
        interaction_type: fields.require(&["interaction type"], heading)?,
        binding_site: fields.text(&["binding site"]),
        ic50: fields.text(&["ic50"]),
        kd: fields.text(&["kd", "dissociation constant"]),
        effect: fields.text(&["effect"]),
        publications: publications::from_fields(&fields),
    })
}

fn partner(entry: &Section) -> DossierResult<ProteinPartnerInteraction> {
    let heading = entry.title.as_str();
    let fields = parse_key_values(&entry.content);

    Ok(ProteinPartnerInteraction {
        accession: fields.require(&["uniprot id", "partner accession", "accession"], heading)?,
        name: heading_name(entry)?,
        interaction_type: fields.require(&["interaction type"], heading)?,
        complex: fields.text(&["complex", "complex name"]),
        publications: publications::from_fields(&fields),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape(content: &str) -> Section {
        Section {
            title: "Interaction Landscape".into(),
            content: content.into(),
        }
    }

    const DNJ: &str = "#### Deoxynojirimycin\n- PubChem CID: 29435\n- ChEMBL ID: CHEMBL307429\n- SMILES: OC[C@H]1NC[C@H](O)[C@@H](O)[C@@H]1O\n- Interaction Type: Inhibitor\n- Binding Site: Catalytic pocket\n- IC50: 0.8 µM (rat liver)\n- Kd: ~1 µM\n- Effect: Competitive inhibition of glucose trimming\n- Publication: PMID: 12345678 | Title: DNJ inhibition\n";

    #[test]
    fn small_molecule_fields() {
        let s = landscape(&format!("### {}\n{}", SMALL_MOLECULES, DNJ));
        let molecules = extract_small_molecules(Some(&s)).unwrap();
        assert_eq!(molecules.len(), 1);
        let m = &molecules[0];
        assert_eq!(m.name, "Deoxynojirimycin");
        assert_eq!(m.pubchem_cid.as_deref(), Some("29435"));
        assert_eq!(m.smiles.as_deref(), Some("OC[C@H]1NC[C@H](O)[C@@H](O)[C@@H]1O"));
        assert_eq!(m.interaction_type, "Inhibitor");
        assert_eq!(m.ic50.as_deref(), Some("0.8 µM (rat liver)"));
        assert_eq!(m.kd.as_deref(), Some("~1 µM"));
        assert_eq!(m.publications.len(), 1);
    }

    #[test]
    fn second_molecule_without_type_rejects() {
        let s = landscape(&format!(
            "### {}\n{}\n#### Castanospermine\n- Effect: Inhibits glucosidase II\n",
            SMALL_MOLECULES, DNJ
        ));
        let err = extract_small_molecules(Some(&s)).unwrap_err();
        assert_eq!(err, DossierError::missing_field("Castanospermine", "interaction type"));
    }

    #[test]
    fn partners() {
        let s = landscape(
            "### Protein Partners\n#### Glucosidase II subunit beta\n- UniProt ID: P14314\n- Interaction Type: Binding partner\n- Complex: Glucosidase II\n",
        );
        let partners = extract_partners(Some(&s)).unwrap();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].accession, "P14314");
        assert_eq!(partners[0].name, "Glucosidase II subunit beta");
        assert_eq!(partners[0].complex.as_deref(), Some("Glucosidase II"));
        assert!(partners[0].publications.is_empty());
    }

    #[test]
    fn partner_accession_mandatory() {
        let s = landscape("### Protein Partners\n#### PRKCSH\n- Interaction Type: Binding partner\n");
        let err = extract_partners(Some(&s)).unwrap_err();
        assert_eq!(err, DossierError::missing_field("PRKCSH", "uniprot id"));
    }

    #[test]
    fn empty_landscape() {
        assert!(extract_small_molecules(None).unwrap().is_empty());
        assert!(extract_partners(Some(&landscape("### Small Molecules\n"))).unwrap().is_empty());
    }
}
