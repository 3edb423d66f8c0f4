//! Pipeline CLI main entry point

use anyhow::Result;
use civigraph_cli::{commands, Cli};
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let success = commands::execute(cli.command)?;

    // Exit with appropriate code
    if success {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
