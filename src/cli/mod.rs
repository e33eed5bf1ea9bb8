//! Command-line interface wiring for phonebook-cleaner.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod clean;
pub mod phone;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Contact list cleaner", long_about = None)]
pub struct Cli {
    /// Defaults to `clean` with settings from the environment.
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command. Settings are only loaded for `clean`.
    pub fn dispatch(self) -> Result<()> {
        match self.command {
            Some(Commands::Clean(args)) => clean::run(args, Settings::load()?),
            Some(Commands::Phone(args)) => phone::run(args),
            None => clean::run(clean::Args::default(), Settings::load()?),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalise names and phones, merge duplicates, write the cleaned file.
    Clean(clean::Args),
    /// Print the canonical form of one or more phone numbers.
    Phone(phone::Args),
}
