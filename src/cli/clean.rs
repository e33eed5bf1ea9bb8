//! CLI entry-point for the cleaning pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, pipeline};

/// Args for the `clean` command. Unset paths fall back to settings.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct Args {
    /// Raw phonebook to read.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Where the cleaned phonebook is written.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Call log location.
    #[arg(long, conflicts_with = "no_call_log")]
    pub call_log: Option<PathBuf>,
    /// Do not write the call log.
    #[arg(long)]
    pub no_call_log: bool,
    /// Skip printing the cleaned table.
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    fn paths(&self, settings: &Settings) -> pipeline::PhonebookPaths {
        let mut paths = settings.paths();
        if let Some(input) = &self.input {
            paths.input = input.clone();
        }
        if let Some(output) = &self.output {
            paths.output = output.clone();
        }
        if let Some(call_log) = &self.call_log {
            paths.call_log = Some(call_log.clone());
        }
        if self.no_call_log {
            paths.call_log = None;
        }
        paths
    }
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let paths = args.paths(&settings);
    let report = pipeline::run(&paths)
        .with_context(|| format!("cleaning {}", paths.input.display()))?;

    println!(
        "Processing complete. Result saved to {}",
        report.output.display()
    );
    if !args.quiet {
        println!("{:#?}", report.table());
    }
    Ok(())
}
