use definitions::DodgySource;
// cargo run --release --bin fix_embl_file -- <IN.embl> <OUT.embl> <DODGY_TRANSCRIPTS> <LOCUS_TAG> <SPECIES> <FAMILIES>
fn main() {
    let args: Vec<_> = std::env::args().collect();
    let code = emblfix_cli::positional::main_with(&args, "dodgy_gene_list", DodgySource::TranscriptList);
    std::process::exit(code);
}
