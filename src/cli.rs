use crate::audit::audit;
use crate::config::load_config;
use crate::report::render;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "langcheck", version, about = "Check if language file keys are complete")]
pub struct Cli {
    /// Language files directory path (default: langs_dir from langcheck.toml)
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,
}

/// Runs the audit and prints the report; the returned flag drives the exit code.
pub fn handle_check(args: Cli) -> Result<bool> {
    let cfg = load_config()?;
    let dir = args.dir.unwrap_or_else(|| PathBuf::from(&cfg.langs_dir));

    let report = audit(&dir)?;
    print!("{}", render(&report));
    Ok(report.all_complete())
}
