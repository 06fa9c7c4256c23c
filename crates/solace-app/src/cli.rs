use std::path::PathBuf;

use clap::Parser;

/// Solace: a calm AI companion you can talk to.
#[derive(Parser, Debug)]
#[command(name = "solace", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`, `solace_ai=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
