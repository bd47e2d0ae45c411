use anyhow::{Result, bail};
use std::collections::HashSet;

use crate::config::InnkeepConfig;

/// Longest accepted scan interval (one week).
pub const MAX_INTERVAL_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Validate a loaded configuration.
/// Returns Ok(()) if valid, or Err with a descriptive message.
pub fn validate_config(config: &InnkeepConfig) -> Result<()> {
    validate_hotel(config)?;
    validate_monitor(config)?;
    Ok(())
}

fn validate_hotel(config: &InnkeepConfig) -> Result<()> {
    if config.hotel.rooms.is_empty() {
        bail!("hotel.rooms cannot be empty");
    }
    let mut seen = HashSet::new();
    for room in &config.hotel.rooms {
        if !seen.insert(room) {
            bail!("hotel.rooms lists room {} more than once", room);
        }
    }
    Ok(())
}

fn validate_monitor(config: &InnkeepConfig) -> Result<()> {
    if config.monitor.interval_seconds == 0 {
        bail!("monitor.interval_seconds must be > 0 (got 0)");
    }
    if config.monitor.interval_seconds > MAX_INTERVAL_SECONDS {
        bail!(
            "monitor.interval_seconds must be <= {} (got {})",
            MAX_INTERVAL_SECONDS,
            config.monitor.interval_seconds
        );
    }
    if config.monitor.history_len == 0 {
        bail!("monitor.history_len must be > 0 (got 0)");
    }
    Ok(())
}
