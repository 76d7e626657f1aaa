//! Gene identifiers come in many spellings. This module folds them into one.
use definitions::{FixError, LocusTag, Result, EXEMPT_SPECIES};

/// Canonical gene name of a raw transcript or gene token.
/// `species` is the species paired with the token, if known. Only the exempt species
/// keeps `_`-names with a `.N`/`.tN` suffix; an unknown species never counts as exempt.
pub fn canonicalize(raw: &str, species: Option<&str>) -> String {
    let mut gene = raw;
    if let Some(idx) = gene.find(":mRNA") {
        gene = &gene[..idx];
    }
    if let Some(idx) = gene.find("-mRNA-") {
        gene = &gene[..idx];
    }
    // SRAE_X000112100.t1, but not MhA1_Contig1285.frz3.fgene2
    if gene.contains('_') {
        if let Some((head, after_dot)) = split_first_field(gene, ".") {
            let is_suffix = after_dot.starts_with('t') || is_digits(after_dot);
            if is_suffix && species != Some(EXEMPT_SPECIES) {
                gene = head;
            }
        }
    }
    // HCOI02162100.t1
    if let Some((head, after_dot)) = split_first_field(gene, ".t") {
        if is_digits(after_dot) {
            gene = head;
        }
    }
    gene.to_string()
}

/// `nAv.1.0.1.t01019-RA` -> `nAv.1.0.1.g01019`
pub fn transcript_to_gene(transcript: &str) -> String {
    let transcript = match transcript.find("-RA") {
        Some(idx) => &transcript[..idx],
        None => transcript,
    };
    match split_first_field(transcript, ".t") {
        Some((head, number)) => format!("{}.g{}", head, number),
        None => transcript.to_string(),
    }
}

pub fn trim_off_zeroes(name: &str) -> &str {
    name.trim_start_matches('0')
}

/// `nAv.1.0.1.g01019` under `NOO` -> `NOO_0000001019`.
pub fn rename(gene: &str, locus_tag: &LocusTag) -> Result<String> {
    match split_first_field(gene, ".g") {
        Some((_, number)) => Ok(format!("{}_{:0>10}", locus_tag, trim_off_zeroes(number))),
        None => Err(FixError::MissingGeneMarker {
            gene: gene.to_string(),
        }),
    }
}

/// Renames `gene` if the locus tag asks for it, otherwise passes it through.
pub fn rename_if_needed(gene: String, locus_tag: &LocusTag) -> Result<String> {
    if locus_tag.renames_genes() {
        rename(&gene, locus_tag)
    } else {
        Ok(gene)
    }
}

// Text before the first `sep`, and the text between the first and the second `sep`.
fn split_first_field<'a>(text: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let idx = text.find(sep)?;
    let rest = &text[idx + sep.len()..];
    let field = match rest.find(sep) {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some((&text[..idx], field))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
