//! Line classification of EMBL feature tables, by substring tests only.
use definitions::AccessionStyle;

/// Lines carrying this marker are dropped from the output.
pub const SUPPRESSION_MARKER: &str = "source:WormBase_imported";
pub const PSEUDO_MARKER: &str = "/pseudo";
pub const STANDARD_NAME_MARKER: &str = "/standard_name";
pub const GENE_NOTE_MARKER: &str = "/note=\"ID:gene:";
pub const CDS_NOTE_MARKER: &str = "note=\"ID:cds:";
pub const EXON_NOTE_MARKER: &str = "note=\"ID:exon:";
/// Any mention of a CDS id, quoted note or not.
pub const CDS_ID_MARKER: &str = "ID:cds:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Gene,
    Cds,
    Exon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Suppressed,
    Accession,
    FeatureNote(FeatureKind),
    Pseudo,
    StandardName,
    Other,
}

pub fn classify(line: &str, style: AccessionStyle) -> LineKind {
    if line.contains(SUPPRESSION_MARKER) {
        LineKind::Suppressed
    } else if is_accession(line, style) {
        LineKind::Accession
    } else if let Some(kind) = feature_kind(line) {
        LineKind::FeatureNote(kind)
    } else if line.contains(PSEUDO_MARKER) {
        LineKind::Pseudo
    } else if line.contains(STANDARD_NAME_MARKER) {
        LineKind::StandardName
    } else {
        LineKind::Other
    }
}

fn is_accession(line: &str, style: AccessionStyle) -> bool {
    match style {
        AccessionStyle::Star => line.contains("AC *"),
        AccessionStyle::Semicolon => line.starts_with("AC"),
    }
}

pub fn feature_kind(line: &str) -> Option<FeatureKind> {
    if line.contains(GENE_NOTE_MARKER) {
        Some(FeatureKind::Gene)
    } else if line.contains(CDS_NOTE_MARKER) {
        Some(FeatureKind::Cds)
    } else if line.contains(EXON_NOTE_MARKER) {
        Some(FeatureKind::Exon)
    } else {
        None
    }
}

/// Gene of a `/note="ID:<kind>:<identifier>"` line.
/// The error is a short description of what is missing.
pub fn gene_from_note(line: &str) -> std::result::Result<&str, &'static str> {
    let note = line
        .split_whitespace()
        .nth(1)
        .ok_or("no qualifier after the FT tag")?;
    let id = note.split('"').nth(1).ok_or("no quoted payload")?;
    let id = id.split(':').nth(2).ok_or("payload is not ID:<kind>:<id>")?;
    Ok(id.split("-mRNA-").next().unwrap_or(id))
}

/// Gene of a CDS note as written by the validator-facing converter: the payload
/// is the first quoted text on the line and must name an mRNA.
pub fn gene_from_cds_note(line: &str) -> std::result::Result<&str, &'static str> {
    let id = line.split('"').nth(1).ok_or("no quoted payload")?;
    let cds = id.split(':').nth(2).ok_or("payload is not ID:cds:<id>")?;
    match cds.find("-mRNA-") {
        Some(idx) => Ok(&cds[..idx]),
        None => Err("CDS id without -mRNA- marker"),
    }
}

/// The accession line(s) replacing `line`. The semicolon style also gets placeholder header lines.
pub fn rewrite_accession(
    line: &str,
    style: AccessionStyle,
) -> std::result::Result<Vec<String>, &'static str> {
    match style {
        AccessionStyle::Star => {
            let scaffold = line
                .split_whitespace()
                .nth(2)
                .ok_or("no scaffold name after AC *")?;
            let mut chars = scaffold.chars();
            chars.next();
            Ok(vec![format!("AC * _{}", chars.as_str())])
        }
        AccessionStyle::Semicolon => {
            let scaffold = line
                .split_whitespace()
                .nth(1)
                .ok_or("no scaffold name after AC")?;
            let mut chars = scaffold.chars();
            chars.next_back();
            Ok(vec![
                "AC   XXX;".to_string(),
                "XX".to_string(),
                format!("AC * _{}", chars.as_str()),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn classify_test() {
        use AccessionStyle::*;
        let star = "AC * _ALUE_contig0000001 length=91883";
        assert_eq!(classify(star, Star), LineKind::Accession);
        assert_eq!(classify("AC   HPLM_contig0000001;", Star), LineKind::Other);
        assert_eq!(classify("AC   HPLM_contig0000001;", Semicolon), LineKind::Accession);
        let gene = r#"FT                   /note="ID:gene:NAV_0000008934""#;
        let cds = r#"FT                   /note="ID:cds:SMUV_0000034201-mRNA-1""#;
        let exon = r#"FT                   /note="ID:exon:SMUV_0000587401-mRNA-1.1""#;
        assert_eq!(classify(gene, Star), LineKind::FeatureNote(FeatureKind::Gene));
        assert_eq!(classify(cds, Star), LineKind::FeatureNote(FeatureKind::Cds));
        assert_eq!(classify(exon, Star), LineKind::FeatureNote(FeatureKind::Exon));
        assert_eq!(classify("FT                   /pseudo", Star), LineKind::Pseudo);
        let std_name = r#"FT                   /standard_name="NAV_0000008934""#;
        assert_eq!(classify(std_name, Star), LineKind::StandardName);
        let suppressed = r#"FT                   /note="source:WormBase_imported""#;
        assert_eq!(classify(suppressed, Star), LineKind::Suppressed);
        assert_eq!(classify("FT   CDS             join(1..10,20..30)", Star), LineKind::Other);
    }
    #[test]
    fn gene_from_note_test() {
        let gene = r#"FT                   /note="ID:gene:NAV_0000008934""#;
        assert_eq!(gene_from_note(gene), Ok("NAV_0000008934"));
        let cds = r#"FT                   /note="ID:cds:SMUV_0000034201-mRNA-1""#;
        assert_eq!(gene_from_note(cds), Ok("SMUV_0000034201"));
        let exon = r#"FT                   /note="ID:exon:SMUV_0000587401-mRNA-1.1""#;
        assert_eq!(gene_from_note(exon), Ok("SMUV_0000587401"));
        assert!(gene_from_note(r#"FT"#).is_err());
        assert!(gene_from_note(r#"FT                   /note=ID:gene:X"#).is_err());
        assert!(gene_from_note(r#"FT                   /note="ID:gene""#).is_err());
    }
    #[test]
    fn gene_from_cds_note_test() {
        let cds = r#"FT                   /note="ID:cds:HPLM_0000313201-mRNA-1""#;
        assert_eq!(gene_from_cds_note(cds), Ok("HPLM_0000313201"));
        let no_mrna = r#"FT                   /note="ID:cds:HPLM_0000313201""#;
        assert_eq!(gene_from_cds_note(no_mrna), Err("CDS id without -mRNA- marker"));
    }
    #[test]
    fn rewrite_accession_test() {
        let star = "AC * _ALUE_contig0000001 length=91883";
        assert_eq!(
            rewrite_accession(star, AccessionStyle::Star),
            Ok(vec!["AC * _ALUE_contig0000001".to_string()])
        );
        let semi = "AC   HPLM_contig0000001;";
        assert_eq!(
            rewrite_accession(semi, AccessionStyle::Semicolon),
            Ok(vec![
                "AC   XXX;".to_string(),
                "XX".to_string(),
                "AC * _HPLM_contig0000001".to_string()
            ])
        );
        assert!(rewrite_accession("AC *", AccessionStyle::Star).is_err());
    }
}
