use definitions::DodgySource;
// cargo run --release --bin fix_embl_file_cds_error -- <IN.embl> <OUT.embl> <VALIDATOR_LOG> <LOCUS_TAG> <SPECIES> <FAMILIES>
fn main() {
    let args: Vec<_> = std::env::args().collect();
    let code = emblfix_cli::positional::main_with(&args, "error_file", DodgySource::ErrorLog);
    std::process::exit(code);
}
