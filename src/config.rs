//! Runtime configuration utilities for phonebook-cleaner.

use std::{env, path::PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::pipeline::{PhonebookPaths, DEFAULT_CALL_LOG, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Raw phonebook to read.
    pub input: PathBuf,
    /// Destination of the cleaned phonebook.
    pub output: PathBuf,
    /// Call log location.
    pub call_log: PathBuf,
    /// Whether instrumented calls are written to the call log.
    pub call_log_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            call_log: PathBuf::from(DEFAULT_CALL_LOG),
            call_log_enabled: true,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let input = env::var("PHONEBOOK_INPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.input);
        let output = env::var("PHONEBOOK_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.output);
        let call_log = env::var("PHONEBOOK_CALL_LOG")
            .map(PathBuf::from)
            .unwrap_or(defaults.call_log);
        let call_log_enabled = match env::var("PHONEBOOK_CALL_LOG_ENABLED") {
            Ok(raw) => parse_flag(&raw).context("parsing PHONEBOOK_CALL_LOG_ENABLED")?,
            Err(_) => defaults.call_log_enabled,
        };

        Ok(Self {
            input,
            output,
            call_log,
            call_log_enabled,
        })
    }

    /// Paths for one pipeline run.
    pub fn paths(&self) -> PhonebookPaths {
        PhonebookPaths {
            input: self.input.clone(),
            output: self.output.clone(),
            call_log: self.call_log_enabled.then(|| self.call_log.clone()),
        }
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}
