//! Definitions -- the shared vocabulary of the EMBL fixing tools.
//! Every front end fills one [FixConfig](FixConfig), the library builds one [ReferenceSets](ReferenceSets) out of the auxiliary files,
//! and the rewrite pass reports back with a [RewriteSummary](RewriteSummary).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
mod error;
pub use error::*;

/// Organisms whose genes are renamed to `{TAG}_{10 digits}`.
pub const RENAMING_LOCUS_TAGS: [&str; 3] = ["NOO", "NLS", "NAV"];
/// Genes of this species keep their `.N`/`.tN` suffixes in family files.
pub const EXEMPT_SPECIES: &str = "caenorhabditis_elegans";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocusTag(String);

impl LocusTag {
    pub fn new(tag: &str) -> Self {
        Self(tag.to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn renames_genes(&self) -> bool {
        RENAMING_LOCUS_TAGS.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for LocusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the dodgy genes come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DodgySource {
    /// One transcript per line, e.g. `nAv.1.0.1.t01019-RA`.
    TranscriptList(PathBuf),
    /// A validator log citing line numbers of CDS features with bad translations.
    ErrorLog(PathBuf),
}

impl DodgySource {
    pub fn path(&self) -> &Path {
        match self {
            DodgySource::TranscriptList(path) => path,
            DodgySource::ErrorLog(path) => path,
        }
    }
    pub fn default_accession_style(&self) -> AccessionStyle {
        match self {
            DodgySource::TranscriptList(_) => AccessionStyle::Star,
            DodgySource::ErrorLog(_) => AccessionStyle::Semicolon,
        }
    }
    /// Files checked against a validator log already carry `/pseudo` for some genes.
    pub fn default_prescan(&self) -> bool {
        matches!(self, DodgySource::ErrorLog(_))
    }
}

/// The two accession line formats the upstream converters produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessionStyle {
    /// `AC * _ALUE_contig0000001 length=91883`
    Star,
    /// `AC   HPLM_contig0000001;`
    Semicolon,
}

/// What to do when a key that should be unique shows up twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Abort,
    Warn,
}

impl DuplicatePolicy {
    /// Either hand the error back, or log it and let the caller carry on.
    pub fn resolve(self, err: FixError) -> Result<()> {
        match self {
            DuplicatePolicy::Abort => Err(err),
            DuplicatePolicy::Warn => {
                log::warn!("DUPLICATE\t{}", err);
                Ok(())
            }
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = FixError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abort" => Ok(DuplicatePolicy::Abort),
            "warn" => Ok(DuplicatePolicy::Warn),
            _ => Err(FixError::Config(format!("unknown duplicate policy {}", s))),
        }
    }
}

impl std::str::FromStr for AccessionStyle {
    type Err = FixError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "star" => Ok(AccessionStyle::Star),
            "semicolon" => Ok(AccessionStyle::Semicolon),
            _ => Err(FixError::Config(format!("unknown accession style {}", s))),
        }
    }
}

/// The configuration of one run.
/// It can be read from a TOML profile or assembled from command line arguments.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FixConfig {
    /// The EMBL file to rewrite.
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub dodgy_source: DodgySource,
    pub locus_tag: LocusTag,
    /// Species name as spelled in the families file, e.g. `onchocerca_ochengi`.
    pub species: String,
    pub families_file: PathBuf,
    /// Overrides the style implied by `dodgy_source`.
    #[serde(default)]
    pub accession_style: Option<AccessionStyle>,
    /// Overrides the pre-scan choice implied by `dodgy_source`.
    #[serde(default)]
    pub prescan_flagged: Option<bool>,
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
    #[serde(default)]
    pub verbose: usize,
    /// If set, a JSON report of the run is written here.
    #[serde(default)]
    pub summary: Option<PathBuf>,
}

impl FixConfig {
    pub fn new<P: Into<PathBuf>>(
        input_file: P,
        output_file: P,
        dodgy_source: DodgySource,
        locus_tag: &str,
        species: &str,
        families_file: P,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            dodgy_source,
            locus_tag: LocusTag::new(locus_tag),
            species: species.to_string(),
            families_file: families_file.into(),
            accession_style: None,
            prescan_flagged: None,
            on_duplicate: DuplicatePolicy::default(),
            verbose: 0,
            summary: None,
        }
    }
    pub fn accession_style(&self) -> AccessionStyle {
        self.accession_style
            .unwrap_or_else(|| self.dodgy_source.default_accession_style())
    }
    pub fn prescan_flagged(&self) -> bool {
        self.prescan_flagged
            .unwrap_or_else(|| self.dodgy_source.default_prescan())
    }
    pub fn required_inputs(&self) -> [&Path; 3] {
        [
            self.input_file.as_path(),
            self.dodgy_source.path(),
            self.families_file.as_path(),
        ]
    }
    /// Fails on the first required input that does not exist.
    pub fn check_inputs(&self) -> Result<()> {
        match self.required_inputs().iter().find(|path| !path.exists()) {
            Some(path) => Err(FixError::MissingInput {
                path: path.to_path_buf(),
            }),
            None => Ok(()),
        }
    }
}

/// The lookup sets consulted while rewriting. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSets {
    /// Genes with a likely assembly or annotation error.
    pub dodgy: HashSet<String>,
    /// Genes of the target species that belong to some family.
    pub in_families: HashSet<String>,
    /// Genes the input already marks `/pseudo` with a `/standard_name`.
    pub already_flagged: HashSet<String>,
}

impl ReferenceSets {
    pub fn new(
        dodgy: HashSet<String>,
        in_families: HashSet<String>,
        already_flagged: HashSet<String>,
    ) -> Self {
        Self {
            dodgy,
            in_families,
            already_flagged,
        }
    }
    pub fn needs_flag(&self, gene: &str) -> bool {
        self.dodgy.contains(gene) && !self.already_flagged.contains(gene)
    }
    pub fn is_in_family(&self, gene: &str) -> bool {
        self.in_families.contains(gene)
    }
}

/// Counts collected by one rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub suppressed: usize,
    pub accessions: usize,
    pub feature_notes: usize,
    /// Notes followed by the synthetic `/pseudo` block.
    pub flagged: usize,
    pub family_notes: usize,
    /// Notes on dodgy genes left alone because the input already flags them.
    pub already_flagged_skipped: usize,
    pub dodgy_genes: usize,
    pub family_genes: usize,
    pub already_flagged_genes: usize,
}

impl std::fmt::Display for RewriteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Lines\tRead\t{}", self.lines_read)?;
        writeln!(f, "Lines\tWritten\t{}", self.lines_written)?;
        writeln!(f, "Lines\tSuppressed\t{}", self.suppressed)?;
        writeln!(f, "Accessions\t{}", self.accessions)?;
        writeln!(f, "Notes\tSeen\t{}", self.feature_notes)?;
        writeln!(f, "Notes\tFlagged\t{}", self.flagged)?;
        writeln!(f, "Notes\tFamily\t{}", self.family_notes)?;
        writeln!(f, "Notes\tSkipped\t{}", self.already_flagged_skipped)?;
        write!(
            f,
            "Genes\t{}\t{}\t{}",
            self.dodgy_genes, self.family_genes, self.already_flagged_genes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn locus_tag_allow_list() {
        assert!(LocusTag::new("NOO").renames_genes());
        assert!(LocusTag::new("NLS").renames_genes());
        assert!(LocusTag::new("NAV").renames_genes());
        assert!(!LocusTag::new("HPLM").renames_genes());
        assert!(!LocusTag::new("noo").renames_genes());
    }
    #[test]
    fn strategy_defaults() {
        let config = FixConfig::new(
            "in.embl",
            "out.embl",
            DodgySource::TranscriptList("dodgy.txt".into()),
            "NOO",
            "onchocerca_ochengi",
            "families.txt",
        );
        assert_eq!(config.accession_style(), AccessionStyle::Star);
        assert!(!config.prescan_flagged());
        let mut config = config;
        config.dodgy_source = DodgySource::ErrorLog("errors.txt".into());
        assert_eq!(config.accession_style(), AccessionStyle::Semicolon);
        assert!(config.prescan_flagged());
        config.prescan_flagged = Some(false);
        config.accession_style = Some(AccessionStyle::Star);
        assert_eq!(config.accession_style(), AccessionStyle::Star);
        assert!(!config.prescan_flagged());
    }
    #[test]
    fn needs_flag() {
        let dodgy: HashSet<_> = ["A", "B"].iter().map(|x| x.to_string()).collect();
        let flagged: HashSet<_> = ["B"].iter().map(|x| x.to_string()).collect();
        let sets = ReferenceSets::new(dodgy, HashSet::new(), flagged);
        assert!(sets.needs_flag("A"));
        assert!(!sets.needs_flag("B"));
        assert!(!sets.needs_flag("C"));
    }
    #[test]
    fn duplicate_policy() {
        let err = || FixError::DuplicateLineNumber { line: 3 };
        assert!(DuplicatePolicy::Abort.resolve(err()).is_err());
        assert!(DuplicatePolicy::Warn.resolve(err()).is_ok());
        assert_eq!("warn".parse::<DuplicatePolicy>().ok(), Some(DuplicatePolicy::Warn));
        assert!("ignore".parse::<DuplicatePolicy>().is_err());
    }
    #[test]
    fn profile_from_toml() {
        let profile = r#"
input_file = "haemonchus_placei_new2.embl.gz"
output_file = "haemonchus_placei_new3.embl"
locus_tag = "HPLM"
species = "haemonchus_placei"
families_file = "complete_families.txt"
on_duplicate = "warn"
verbose = 2

[dodgy_source]
error_log = "validator.log"
"#;
        let config: FixConfig = toml::from_str(profile).unwrap();
        assert_eq!(
            config.dodgy_source,
            DodgySource::ErrorLog("validator.log".into())
        );
        assert_eq!(config.locus_tag.as_str(), "HPLM");
        assert_eq!(config.on_duplicate, DuplicatePolicy::Warn);
        assert_eq!(config.accession_style(), AccessionStyle::Semicolon);
        assert_eq!(config.summary, None);
        assert_eq!(config.verbose, 2);
    }
}
