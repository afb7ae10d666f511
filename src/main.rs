mod cli;
mod client;
mod config;
mod error;
mod logging;
mod trip;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose)?;
    cli.run().await
}
