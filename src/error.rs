use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for loading, cleaning and writing a phonebook.
#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("record {record}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        record: u64,
        expected: usize,
        found: usize,
    },
    #[error("call log '{}' could not be written: {source}", path.display())]
    CallLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to render call log value: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
