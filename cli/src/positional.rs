//! The classic six positional arguments:
//! `input_embl output_embl <dodgy source> locus_tag our_species families_file`.
use definitions::{DodgySource, FixConfig};
use std::path::PathBuf;

pub fn usage(program: &str, dodgy_source: &str) -> String {
    format!(
        "Usage: {} input_embl output_embl {} locus_tag our_species families_file",
        program, dodgy_source
    )
}

/// `None` if the number of arguments is wrong or a required input does not exist.
pub fn parse_positional(
    args: &[String],
    make_source: fn(PathBuf) -> DodgySource,
) -> Option<FixConfig> {
    if args.len() != 7 {
        return None;
    }
    let source = make_source(PathBuf::from(&args[3]));
    let config = FixConfig::new(&args[1], &args[2], source, &args[4], &args[5], &args[6]);
    match config.check_inputs() {
        Ok(_) => Some(config),
        Err(_) => None,
    }
}

/// Runs a positional front end and returns its exit code.
pub fn main_with(
    args: &[String],
    dodgy_source: &str,
    make_source: fn(PathBuf) -> DodgySource,
) -> i32 {
    let config = match parse_positional(args, make_source) {
        Some(config) => config,
        None => {
            let program = args.first().map(|x| x.as_str()).unwrap_or("fix_embl_file");
            println!("{}", usage(program, dodgy_source));
            return 1;
        }
    };
    match crate::pipeline::run_pipeline(&config) {
        Ok(_) => {
            println!("FINISHED");
            0
        }
        Err(why) => {
            eprintln!("{}", why);
            1
        }
    }
}
