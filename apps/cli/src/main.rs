//! FilterForge CLI — loot-filter config generator.
//!
//! Fetches a base config template and named filter/rune fragments from the
//! upstream repository and splices them into a single merged config file.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
