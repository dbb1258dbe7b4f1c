use anyhow::{Context, Result};
use clap::Parser;
use simple_logger::SimpleLogger;

use poolscope::{cli::Cli, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::from_file(&cli.config)
        .with_context(|| format!("Failed to load settings from '{}'", cli.config))?;

    SimpleLogger::new()
        .with_level(settings.logging.level_filter())
        .init()
        .context("Failed to initialize logger")?;

    let output = cli.run(&settings)?;
    println!("{}", output);
    Ok(())
}
