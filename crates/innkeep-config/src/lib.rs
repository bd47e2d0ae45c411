//! Configuration loading and validation (`~/.config/innkeep/config.toml`).

pub mod config;
pub mod validate;

pub use config::{CONFIG_ENV_VAR, HotelConfig, InnkeepConfig, MonitorConfig};
pub use validate::validate_config;
