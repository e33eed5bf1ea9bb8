//! Entry point wiring CLI dispatch to the cleaning pipeline.

use anyhow::Result;
use phonebook_cleaner::{cli::Cli, logging};
use tracing::{info, instrument};

#[instrument]
fn main() -> Result<()> {
    logging::init_tracing()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch()
}
