use clap::{Parser, Subcommand};
use innkeep_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "innkeep")]
#[command(about = "Innkeep: room reservation desk with background availability monitoring")]
#[command(version)]
pub struct Cli {
    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to $INNKEEP_CONFIG or ~/.config/innkeep/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive reservation menu
    Menu,

    /// Book rooms for several guests concurrently and report who got one
    Simulate {
        /// Number of concurrent guests (1-1000)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=1000))]
        guests: u16,
    },

    /// Show/validate configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Validate configuration file
    Validate,
}
