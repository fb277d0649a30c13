//! CLI entry point for the skilleProfil artwork generator

use clap::Parser;
use skilleprofil::io::cli::{ArtworkProcessor, Cli};
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> skilleprofil::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    let mut processor = ArtworkProcessor::new(cli);
    processor.process()?;
    Ok(())
}
