//! The rewrite pass. Every input line is written once and in order, except suppressed lines;
//! the synthetic lines for a flagged gene follow its note line directly.
use crate::classify::{self, LineKind};
use definitions::{AccessionStyle, FixError, ReferenceSets, Result, RewriteSummary};
use std::io::{BufRead, Write};

pub const PSEUDO_LINE: &str = "FT                   /pseudo";
pub const ASSEMBLY_ERROR_NOTE: &str =
    "FT                   /note=\"odd gene structure probably caused by assembly error\"";
pub const FAMILY_NOTE: &str = "FT                   /note=\"predicted protein belongs to a gene family in the Compara database of the International Helminth Genomes Consortium\"";

pub trait Rewrite {
    fn rewrite<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        style: AccessionStyle,
    ) -> Result<RewriteSummary>;
}

impl Rewrite for ReferenceSets {
    fn rewrite<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        style: AccessionStyle,
    ) -> Result<RewriteSummary> {
        let mut summary = RewriteSummary {
            dodgy_genes: self.dodgy.len(),
            family_genes: self.in_families.len(),
            already_flagged_genes: self.already_flagged.len(),
            ..RewriteSummary::default()
        };
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            summary.lines_read += 1;
            let malformed = |reason| FixError::MalformedLine {
                line_num: idx + 1,
                line: line.to_string(),
                reason,
            };
            match classify::classify(line, style) {
                LineKind::Suppressed => summary.suppressed += 1,
                LineKind::Accession => {
                    let lines = classify::rewrite_accession(line, style).map_err(malformed)?;
                    for line in lines.iter() {
                        writeln!(writer, "{}", line)?;
                    }
                    summary.lines_written += lines.len();
                    summary.accessions += 1;
                }
                LineKind::FeatureNote(_) => {
                    let gene = classify::gene_from_note(line).map_err(malformed)?;
                    writeln!(writer, "{}", line)?;
                    summary.lines_written += 1;
                    summary.feature_notes += 1;
                    if self.needs_flag(gene) {
                        trace!("Flag\t{}", gene);
                        writeln!(writer, "{}", PSEUDO_LINE)?;
                        writeln!(writer, "{}", ASSEMBLY_ERROR_NOTE)?;
                        summary.lines_written += 2;
                        summary.flagged += 1;
                        if self.is_in_family(gene) {
                            writeln!(writer, "{}", FAMILY_NOTE)?;
                            summary.lines_written += 1;
                            summary.family_notes += 1;
                        }
                    } else if self.dodgy.contains(gene) {
                        summary.already_flagged_skipped += 1;
                    }
                }
                LineKind::Pseudo | LineKind::StandardName | LineKind::Other => {
                    writeln!(writer, "{}", line)?;
                    summary.lines_written += 1;
                }
            }
        }
        Ok(summary)
    }
}
