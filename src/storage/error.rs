use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unexpected ledger header: {found}")]
    UnexpectedHeader { found: String },

    #[error("Malformed ledger row at line {line}: {source}")]
    MalformedRow {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
