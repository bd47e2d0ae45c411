use anyhow::{Context, Result};
use innkeep_config::{InnkeepConfig, validate_config};
use innkeep_pool::RoomPool;
use std::path::Path;

/// Load and validate the configuration, from `path` when given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<InnkeepConfig> {
    let config = match path {
        Some(path) => InnkeepConfig::load_from(path)?,
        None => InnkeepConfig::load()?,
    };
    validate_config(&config).context("Invalid configuration")?;
    Ok(config)
}

pub(crate) fn build_pool(config: &InnkeepConfig) -> Result<RoomPool> {
    RoomPool::new(config.hotel.rooms.iter().copied()).context("Failed to build room pool")
}
