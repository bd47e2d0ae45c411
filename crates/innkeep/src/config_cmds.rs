use anyhow::Result;
use innkeep_config::InnkeepConfig;
use innkeep_core::OutputFormat;

pub(crate) fn handle_config_show(config: &InnkeepConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json_str = serde_json::to_string_pretty(config)?;
            println!("{}", json_str);
        }
        OutputFormat::Text => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

/// Loading already validated the config; report the outcome.
pub(crate) fn handle_config_validate(config: &InnkeepConfig) -> Result<()> {
    eprintln!(
        "Configuration is valid ({} rooms, scan every {}s)",
        config.hotel.rooms.len(),
        config.monitor.interval_seconds
    );
    Ok(())
}
