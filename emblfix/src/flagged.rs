use crate::classify::{self, GENE_NOTE_MARKER, PSEUDO_MARKER, STANDARD_NAME_MARKER};
use definitions::{DuplicatePolicy, FixError, Result};
use std::collections::HashSet;
use std::io::BufRead;

/// Genes the EMBL file already marks as pseudo: after a gene note, a `/pseudo`
/// line shows up before the `/standard_name` line that closes the gene.
pub fn already_flagged<R: BufRead>(reader: R, policy: DuplicatePolicy) -> Result<HashSet<String>> {
    let mut flagged = HashSet::new();
    let mut current: Option<String> = None;
    let mut is_pseudo = false;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.contains(GENE_NOTE_MARKER) {
            let gene = classify::gene_from_note(&line).map_err(|reason| FixError::MalformedLine {
                line_num: idx + 1,
                line: line.clone(),
                reason,
            })?;
            current = Some(gene.to_string());
            is_pseudo = false;
        }
        let gene = match current.as_ref() {
            Some(gene) => gene,
            None => continue,
        };
        if line.contains(PSEUDO_MARKER) {
            is_pseudo = true;
        }
        if line.contains(STANDARD_NAME_MARKER) {
            if is_pseudo && !flagged.insert(gene.clone()) {
                let gene = gene.clone();
                policy.resolve(FixError::DuplicateGene { gene, set: "already-flagged" })?;
            }
            current = None;
            is_pseudo = false;
        }
    }
    debug!("Flagged\tGenes\t{}", flagged.len());
    Ok(flagged)
}
