use clap::{Arg, ArgAction, ArgMatches, Command};
use definitions::{DodgySource, FixConfig, Result};

fn verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Debug mode")
}

// Arguments shared by the subcommands rewriting an EMBL file.
fn rewrite_args(command: Command) -> Command {
    command
        .arg(verbose())
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("EMBL")
                .required(true)
                .help("Input EMBL file. It can be gzipped."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("EMBL")
                .required(true)
                .help("Output EMBL file."),
        )
        .arg(
            Arg::new("locus_tag")
                .long("locus_tag")
                .short('l')
                .value_name("TAG")
                .required(true)
                .help("Locus tag of the organism. Genes are renamed for NOO, NLS, and NAV."),
        )
        .arg(
            Arg::new("species")
                .long("species")
                .short('s')
                .required(true)
                .help("Species name as written in the families file."),
        )
        .arg(
            Arg::new("families")
                .long("families")
                .short('f')
                .value_name("FILE")
                .required(true)
                .help("Gene families, one `family` line per family."),
        )
        .arg(
            Arg::new("accession_style")
                .long("accession_style")
                .value_parser(["star", "semicolon"])
                .help("Format of the AC lines. Defaults to the usual format of the dodgy source."),
        )
        .arg(
            Arg::new("prescan")
                .long("prescan")
                .value_parser(clap::value_parser!(bool))
                .help("Skip genes already marked /pseudo in the input."),
        )
        .arg(
            Arg::new("on_duplicate")
                .long("on_duplicate")
                .default_value("abort")
                .value_parser(["abort", "warn"])
                .help("Abort or warn when a position or a gene is reported twice."),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .value_name("JSON")
                .help("Write a summary of the run to this file."),
        )
}

fn subcommand_transcript_list() -> Command {
    let command = Command::new("transcript_list")
        .version("0.1")
        .about("Flag genes of the transcripts listed as dodgy.")
        .arg(
            Arg::new("transcripts")
                .long("transcripts")
                .short('d')
                .value_name("FILE")
                .required(true)
                .help("Dodgy transcripts. The first column is used."),
        );
    rewrite_args(command)
}

fn subcommand_cds_error() -> Command {
    let command = Command::new("cds_error")
        .version("0.1")
        .about("Flag genes whose CDS translation is reported as mostly X by the validator.")
        .arg(
            Arg::new("error_log")
                .long("error_log")
                .short('e')
                .value_name("FILE")
                .required(true)
                .help("Log of the validator run on the input file."),
        );
    rewrite_args(command)
}

fn subcommand_pipeline() -> Command {
    Command::new("pipeline")
        .version("0.1")
        .about("Run with the configuration in a TOML profile.")
        .arg(
            Arg::new("profile")
                .long("profile")
                .short('p')
                .value_name("TOML")
                .required(true)
                .help("Profile of the run."),
        )
}

pub fn emblfix_parser() -> Command {
    Command::new("emblfix")
        .version("0.1")
        .about("Flags genes with likely assembly errors in EMBL files.")
        .arg_required_else_help(true)
        .subcommand(subcommand_transcript_list())
        .subcommand(subcommand_cds_error())
        .subcommand(subcommand_pipeline())
}

/// Configuration of the `transcript_list` and `cds_error` subcommands.
pub fn config_from_matches(matches: &ArgMatches, dodgy_source: DodgySource) -> Result<FixConfig> {
    let get = |id: &str| get_str(matches, id);
    let mut config = FixConfig::new(
        get("input"),
        get("output"),
        dodgy_source,
        get("locus_tag"),
        get("species"),
        get("families"),
    );
    if let Some(style) = matches.get_one::<String>("accession_style") {
        config.accession_style = Some(style.parse()?);
    }
    config.prescan_flagged = matches.get_one::<bool>("prescan").copied();
    config.on_duplicate = get("on_duplicate").parse()?;
    config.verbose = matches.get_count("verbose") as usize;
    config.summary = matches.get_one::<String>("summary").map(|x| x.into());
    Ok(config)
}

fn get_str<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|x| x.as_str())
        .unwrap_or_default()
}
