//! Append-only call log: one line per instrumented function call.
//!
//! Lines look like `2024-05-01 12:00:00.000000 - format_phone("8 999 1234567") -> "+7(999)123-45-67"`.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

use crate::error::{PhonebookError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A single recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallEntry {
    pub timestamp: DateTime<Local>,
    pub function: String,
    pub args: String,
    pub result: String,
}

impl CallEntry {
    pub fn new(function: impl Into<String>, args: String, result: String) -> Self {
        Self {
            timestamp: Local::now(),
            function: function.into(),
            args,
            result,
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{} - {}({}) -> {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.function,
            self.args,
            self.result
        )
    }
}

/// Destination for call entries.
pub trait CallSink {
    fn record(&self, entry: &CallEntry) -> Result<()>;

    /// Sinks that drop everything return false so callers can skip rendering.
    fn enabled(&self) -> bool {
        true
    }
}

/// Sink used when call logging is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl CallSink for Discard {
    fn record(&self, _entry: &CallEntry) -> Result<()> {
        Ok(())
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// File-backed sink. The file is reopened in append mode for every entry.
#[derive(Debug, Clone)]
pub struct FileCallLog {
    path: PathBuf,
}

impl FileCallLog {
    /// Start a fresh log at `path`, removing whatever a previous run left there.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(PhonebookError::CallLog { path, source }),
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl CallSink for FileCallLog {
    fn record(&self, entry: &CallEntry) -> Result<()> {
        self.append(&entry.line())
            .map_err(|source| PhonebookError::CallLog {
                path: self.path.clone(),
                source,
            })
    }
}

/// Render call arguments. Pass a tuple; its elements are joined with `, `.
pub fn render_args<A: Serialize + ?Sized>(args: &A) -> Result<String> {
    let rendered = match serde_json::to_value(args)? {
        Value::Array(items) => items
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    };
    Ok(rendered)
}

/// Run `call` and record it in `sink` once it has returned.
pub fn logged<A, R, F>(sink: &dyn CallSink, function: &str, args: A, call: F) -> Result<R>
where
    A: Serialize,
    R: Serialize,
    F: FnOnce() -> R,
{
    let result = call();
    if sink.enabled() {
        let entry = CallEntry::new(function, render_args(&args)?, serde_json::to_string(&result)?);
        sink.record(&entry)?;
    }
    Ok(result)
}

/// Like [`logged`] for fallible calls; failures are propagated without an entry.
pub fn try_logged<A, R, F>(sink: &dyn CallSink, function: &str, args: A, call: F) -> Result<R>
where
    A: Serialize,
    R: Serialize,
    F: FnOnce() -> Result<R>,
{
    let result = call()?;
    logged(sink, function, args, || result)
}
