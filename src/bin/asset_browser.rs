//! Asset Browser CLI Binary

use anyhow::Context;
use asset_browser::logging::init_logging;
use asset_browser::tooling::cli::{Cli, CliContext};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.root.clone(), cli.config.clone())
        .context("Error initializing scan root")?;

    let base = context.config().logging.clone().with_env_overrides();
    let logging = cli.logging_config(&base);
    init_logging(Some(&logging)).context("Error initializing logging")?;

    let output = context.execute(&cli.command)?;
    print!("{}", output);
    Ok(())
}
