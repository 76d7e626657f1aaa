use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("required input {path:?} does not exist")]
    MissingInput { path: PathBuf },

    /// The run profile or a command line option could not be understood.
    #[error("configuration error: {0}")]
    Config(String),

    /// The validator log cites the same line of the EMBL file twice.
    #[error("line {line} is reported more than once in the error log")]
    DuplicateLineNumber { line: usize },

    #[error("gene {gene} is recorded twice in the {set} set")]
    DuplicateGene { gene: String, set: &'static str },

    /// `line_num` is 1-based, counted in the file the line came from.
    #[error("line {line_num}: {reason}: {line}")]
    MalformedLine {
        line_num: usize,
        line: String,
        reason: &'static str,
    },

    #[error("gene {gene} has no `.g` marker to derive a new name from")]
    MissingGeneMarker { gene: String },
}

pub type Result<T> = std::result::Result<T, FixError>;
