//! Binary crate for the `skycast` terminal client.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive prompt → fetch → show session
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod report;
mod session;
mod spinner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
