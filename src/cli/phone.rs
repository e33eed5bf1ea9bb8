//! CLI entry-point for one-off phone formatting.

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::data::phone::format_phone;

/// Args for the `phone` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Raw phone strings, e.g. "8 (495) 913-04-78 доб. 0792".
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

pub fn run(args: Args) -> Result<()> {
    for raw in &args.numbers {
        println!("{}", format_phone(raw));
    }
    Ok(())
}
