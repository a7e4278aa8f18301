use anyhow::Result;
use langcheck::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load env variables from .env if present
    let _ = dotenvy::dotenv();
    // init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = <Cli as clap::Parser>::parse();

    let complete = cli::handle_check(args)?;
    if !complete {
        std::process::exit(1);
    }
    Ok(())
}
