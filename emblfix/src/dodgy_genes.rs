//! Dodgy genes -- genes with a likely assembly or annotation error.
//!
//! They are either listed explicitly as transcripts, or found through a validator log
//! pointing at CDS features whose translation is mostly `X`.
use crate::classify;
use crate::normalize::{rename_if_needed, transcript_to_gene};
use definitions::{DuplicatePolicy, FixError, LocusTag, Result};
use std::collections::HashSet;
use std::io::BufRead;

/// Log lines of interest contain this message.
pub const CDS_ERROR_MESSAGE: &str =
    "ERROR: Protein coding feature translation contains more than 50% X";

/// One transcript per line (the first token), e.g. `nAv.1.0.1.t01019-RA`.
pub fn from_transcript_list<R: BufRead>(
    reader: R,
    locus_tag: &LocusTag,
) -> Result<HashSet<String>> {
    let mut dodgy_genes = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let transcript = match line.split_whitespace().next() {
            Some(transcript) => transcript,
            None => continue,
        };
        let gene = transcript_to_gene(transcript);
        dodgy_genes.insert(rename_if_needed(gene, locus_tag)?);
    }
    debug!("Dodgy\tTranscriptList\t{}", dodgy_genes.len());
    Ok(dodgy_genes)
}

/// Line numbers of the EMBL file that the validator complains about.
/// A range like `1102966-1102969` collapses to its start.
pub fn error_positions<R: BufRead>(reader: R, policy: DuplicatePolicy) -> Result<HashSet<usize>> {
    let mut positions = HashSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.contains(CDS_ERROR_MESSAGE) {
            continue;
        }
        let position = parse_position(&line).map_err(|reason| FixError::MalformedLine {
            line_num: idx + 1,
            line: line.clone(),
            reason,
        })?;
        if !positions.insert(position) {
            policy.resolve(FixError::DuplicateLineNumber { line: position })?;
        }
    }
    debug!("Dodgy\tErrorPositions\t{}", positions.len());
    Ok(positions)
}

// `... [haemonchus_placei_new2.embl.gz,  line: 1102966-1102969` -> 1102966
fn parse_position(line: &str) -> std::result::Result<usize, &'static str> {
    let (_, rest) = line.split_once("line: ").ok_or("no `line: ` position")?;
    let field = rest.split_whitespace().next().ok_or("empty position")?;
    let start = field.split('-').next().unwrap_or(field);
    start.parse().map_err(|_| "position is not a number")
}

/// Scans the EMBL file. Once a reported line is reached, the next CDS id seen names a dodgy gene.
pub fn from_cds_positions<R: BufRead>(
    reader: R,
    positions: &HashSet<usize>,
    policy: DuplicatePolicy,
) -> Result<HashSet<String>> {
    let mut dodgy_genes = HashSet::new();
    let mut searching_for_cds = false;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        if positions.contains(&line_num) {
            searching_for_cds = true;
        }
        if !searching_for_cds || !line.contains(classify::CDS_ID_MARKER) {
            continue;
        }
        let gene = classify::gene_from_cds_note(&line).map_err(|reason| FixError::MalformedLine {
            line_num,
            line: line.clone(),
            reason,
        })?;
        trace!("Dodgy\tCDS\t{}\t{}", line_num, gene);
        if !dodgy_genes.insert(gene.to_string()) {
            let gene = gene.to_string();
            policy.resolve(FixError::DuplicateGene { gene, set: "cds-error" })?;
        }
        searching_for_cds = false;
    }
    debug!("Dodgy\tCDSErrors\t{}", dodgy_genes.len());
    Ok(dodgy_genes)
}
