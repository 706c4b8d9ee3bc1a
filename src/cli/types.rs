// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cfddns")]
#[command(about = "Cloudflare dynamic DNS updater", long_about = None)]
pub struct Cli {
    /// Path to the JSON config file. If not provided, falls back to
    /// $CFDDNS_CONFIG_PATH, then to the user config dir
    /// (e.g. ~/.config/cfddns/config.json).
    #[arg(long = "config", short = 'c')]
    pub config_path: Option<PathBuf>,

    /// Address detector to use ("ipify" or "ip-cmd"), overriding the
    /// config file.
    #[arg(long)]
    pub detector: Option<String>,

    /// Update interval in seconds, overriding the config file.
    #[arg(long)]
    pub interval: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print build metadata and exit.
    Version,
}
