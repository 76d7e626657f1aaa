use definitions::{DodgySource, FixConfig, Result};
use emblfix_cli::emblfix_commands::{config_from_matches, emblfix_parser};
use emblfix_cli::pipeline::{load_profile, run_pipeline};
#[macro_use]
extern crate log;

fn main() {
    let matches = emblfix_parser().get_matches();
    let config = match matches.subcommand() {
        Some(("pipeline", sub_m)) => pipeline(sub_m),
        Some(("transcript_list", sub_m)) => transcript_list(sub_m),
        Some(("cds_error", sub_m)) => cds_error(sub_m),
        _ => unreachable!(),
    };
    let result = config.and_then(|config| run_pipeline(&config));
    match result {
        Ok(summary) => {
            info!("FINISHED\t{}", summary.lines_written);
            println!("FINISHED");
        }
        Err(why) => {
            eprintln!("{}", why);
            std::process::exit(1);
        }
    }
}

fn pipeline(matches: &clap::ArgMatches) -> Result<FixConfig> {
    let path: &String = matches.get_one("profile").unwrap();
    load_profile(path)
}

fn transcript_list(matches: &clap::ArgMatches) -> Result<FixConfig> {
    let list: &String = matches.get_one("transcripts").unwrap();
    config_from_matches(matches, DodgySource::TranscriptList(list.into()))
}

fn cds_error(matches: &clap::ArgMatches) -> Result<FixConfig> {
    let log: &String = matches.get_one("error_log").unwrap();
    config_from_matches(matches, DodgySource::ErrorLog(log.into()))
}
