//! Load, clean and write a phonebook in one pass.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    calllog::{logged, try_logged, CallSink, Discard, FileCallLog},
    data::{
        merge::{self, Deduplicated},
        phonebook,
        record::{Contact, RawRecord, HEADER},
    },
    error::Result,
};

pub const DEFAULT_INPUT: &str = "phonebook_raw.csv";
pub const DEFAULT_OUTPUT: &str = "phonebook.csv";
pub const DEFAULT_CALL_LOG: &str = "phonebook_processing.log";

/// Files touched by one run. `call_log: None` disables the call log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub call_log: Option<PathBuf>,
}

impl Default for PhonebookPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            call_log: Some(PathBuf::from(DEFAULT_CALL_LOG)),
        }
    }
}

/// Outcome of [`run`].
#[derive(Debug, Clone)]
pub struct Report {
    pub rows_read: usize,
    pub duplicates_merged: usize,
    pub output: PathBuf,
    pub contacts: Vec<Contact>,
}

impl Report {
    /// Header row followed by every written contact.
    pub fn table(&self) -> Vec<Vec<String>> {
        let header = HEADER.iter().map(|h| h.to_string()).collect();
        std::iter::once(header)
            .chain(self.contacts.iter().map(Contact::to_row))
            .collect()
    }
}

/// Normalise and deduplicate rows already in memory.
pub fn clean(rows: &[RawRecord], sink: &dyn CallSink) -> Result<Deduplicated> {
    let contacts = try_logged(sink, "normalize", (rows,), || {
        phonebook::normalize(rows, sink)
    })?;
    logged(sink, "deduplicate", (&contacts,), || {
        merge::deduplicate(contacts.iter().cloned())
    })
}

/// Run the whole pipeline against the filesystem.
#[instrument(skip_all, fields(input = %paths.input.display(), output = %paths.output.display()))]
pub fn run(paths: &PhonebookPaths) -> Result<Report> {
    let sink: Box<dyn CallSink> = match &paths.call_log {
        Some(path) => Box::new(FileCallLog::create(path)?),
        None => Box::new(Discard),
    };

    let rows = phonebook::load(&paths.input)?;
    let cleaned = clean(&rows, sink.as_ref())?;
    phonebook::write(&paths.output, &cleaned.contacts)?;

    info!(
        rows = rows.len(),
        contacts = cleaned.contacts.len(),
        merged = cleaned.merged,
        "phonebook cleaned"
    );
    Ok(Report {
        rows_read: rows.len(),
        duplicates_merged: cleaned.merged,
        output: paths.output.clone(),
        contacts: cleaned.contacts,
    })
}
