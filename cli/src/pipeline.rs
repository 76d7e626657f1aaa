//! Pipeline -- run one configuration from end to end.
//!
//! A configuration is either given as a TOML profile or assembled by the subcommands.
//! Every entry point ends up in [run_pipeline](run_pipeline).
use definitions::{FixConfig, FixError, Result, RewriteSummary};
use log::*;
use std::path::Path;

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<FixConfig> {
    let file = std::fs::read_to_string(path.as_ref())?;
    toml::from_str(&file).map_err(|why| FixError::Config(format!("{:?}: {}", path.as_ref(), why)))
}

/// 0 -> warn, 1 -> info, 2 -> debug, more -> trace. `RUST_LOG` wins if set.
pub fn init_logger(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    if let Err(why) = env_logger::Builder::from_env(env).try_init() {
        debug!("{:?} The logger is set already.", why);
    }
}

pub fn run_pipeline(config: &FixConfig) -> Result<RewriteSummary> {
    init_logger(config.verbose);
    debug!("Config\t{:?}", config);
    let summary = emblfix::run(config)?;
    debug!("END\t{:?}", config.output_file);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use definitions::DodgySource;
    #[test]
    fn profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("profile.toml");
        let content = r#"
input_file = "onchocerca_ochengi.embl"
output_file = "onchocerca_ochengi_new.embl"
locus_tag = "NOO"
species = "onchocerca_ochengi"
families_file = "complete_families.txt"
accession_style = "star"
summary = "run.json"

[dodgy_source]
transcript_list = "onchocerca_ochengi.proteins_with_stops2"
"#;
        std::fs::write(&profile, content).unwrap();
        let config = load_profile(&profile).unwrap();
        assert_eq!(
            config.dodgy_source,
            DodgySource::TranscriptList("onchocerca_ochengi.proteins_with_stops2".into())
        );
        assert!(!config.prescan_flagged());
        assert_eq!(config.summary, Some("run.json".into()));
    }
    #[test]
    fn broken_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("profile.toml");
        std::fs::write(&profile, "input_file = \n").unwrap();
        assert!(matches!(load_profile(&profile), Err(FixError::Config(_))));
        let missing = dir.path().join("missing.toml");
        assert!(matches!(load_profile(&missing), Err(FixError::Io(_))));
    }
    #[test]
    fn pipeline_with_profile() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path();
        let embl = "AC * _ASIM_contig0000001 length=9\nFT                   /note=\"ID:cds:ASIM_0000655901-mRNA-1\"\n";
        std::fs::write(dir.join("in.embl"), embl).unwrap();
        std::fs::write(dir.join("stops.txt"), "ASIM_0000655901-mRNA-1\n").unwrap();
        std::fs::write(dir.join("families.txt"), "family 1 : ASIM_0000655901-mRNA-1 (anisakis_simplex)\n").unwrap();
        let config = FixConfig::new(
            dir.join("in.embl"),
            dir.join("out.embl"),
            DodgySource::TranscriptList(dir.join("stops.txt")),
            "ASIM",
            "anisakis_simplex",
            dir.join("families.txt"),
        );
        let summary = run_pipeline(&config).unwrap();
        // The transcript list names the mRNA, which is not the gene name.
        assert_eq!(summary.flagged, 0);
        assert_eq!(summary.family_genes, 1);
        assert_eq!(summary.lines_written, 2);
    }
}
