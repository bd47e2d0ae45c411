use anyhow::Result;
use clap::Parser;

mod cli;
mod config_cmds;
mod menu;
mod outcome;
mod setup;
mod simulate;

use cli::{Cli, Commands, ConfigCommands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let output_format = cli.format;
    let config = setup::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            menu::handle_menu(&config, output_format).await?;
        }
        Commands::Simulate { guests } => {
            simulate::handle_simulate(&config, usize::from(guests), output_format).await?;
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => {
                config_cmds::handle_config_show(&config, output_format)?;
            }
            ConfigCommands::Validate => {
                config_cmds::handle_config_validate(&config)?;
            }
        },
    }

    Ok(())
}
