//! Flags dodgy genes in EMBL files prepared for submission.
//!
//! The run is a handful of sequential passes. The reference sets are built first,
//! from the auxiliary files and, for validator-driven runs, from pre-scans of the EMBL file itself.
//! Then the EMBL file is streamed once more and rewritten.
pub mod classify;
pub mod dodgy_genes;
pub mod families;
pub mod flagged;
pub mod input;
pub mod normalize;
pub mod rewrite;
#[macro_use]
extern crate log;

pub use rewrite::Rewrite;

use definitions::{DodgySource, FixConfig, ReferenceSets, Result, RewriteSummary};
use std::collections::HashSet;
use std::io::Write;

pub fn build_reference_sets(config: &FixConfig) -> Result<ReferenceSets> {
    let policy = config.on_duplicate;
    let dodgy = match &config.dodgy_source {
        DodgySource::TranscriptList(path) => {
            debug!("START\tReading dodgy transcripts");
            dodgy_genes::from_transcript_list(input::open(path)?, &config.locus_tag)?
        }
        DodgySource::ErrorLog(path) => {
            debug!("START\tReading error log");
            let positions = dodgy_genes::error_positions(input::open(path)?, policy)?;
            let embl = input::open(&config.input_file)?;
            dodgy_genes::from_cds_positions(embl, &positions, policy)?
        }
    };
    debug!("START\tReading families");
    let families = input::open(&config.families_file)?;
    let in_families =
        families::genes_in_families(families, &config.species, &config.locus_tag)?;
    let already_flagged = if config.prescan_flagged() {
        debug!("START\tFinding genes flagged already");
        flagged::already_flagged(input::open(&config.input_file)?, policy)?
    } else {
        HashSet::new()
    };
    info!("Reference\tDodgy\t{}", dodgy.len());
    info!("Reference\tFamily\t{}", in_families.len());
    info!("Reference\tFlagged\t{}", already_flagged.len());
    Ok(ReferenceSets::new(dodgy, in_families, already_flagged))
}

/// Runs the whole pipeline described by `config`.
pub fn run(config: &FixConfig) -> Result<RewriteSummary> {
    config.check_inputs()?;
    let sets = build_reference_sets(config)?;
    debug!("START\tRewriting {:?}", config.input_file);
    let reader = input::open(&config.input_file)?;
    let mut wtr = input::create(&config.output_file)?;
    let summary = sets.rewrite(reader, &mut wtr, config.accession_style())?;
    wtr.flush()?;
    for line in summary.to_string().lines() {
        info!("Summary\t{}", line);
    }
    if let Some(path) = config.summary.as_ref() {
        let mut wtr = input::create(path)?;
        serde_json::ser::to_writer_pretty(&mut wtr, &summary).map_err(std::io::Error::from)?;
        wtr.flush()?;
    }
    Ok(summary)
}
