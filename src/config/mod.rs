pub mod core;
pub mod gameplay;

pub use self::core::EngineConfig;
pub use gameplay::GameplayConfig;

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::info;

use crate::utils::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "skyisle.toml";

/// Reads the user config, writing the defaults on first run.
pub fn load_or_create_config() -> Result<EngineConfig> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        let default_config = EngineConfig::default();
        default_config
            .save(&config_path)
            .context("Failed to write default config")?;
        info!("wrote default config to {}", config_path.display());
        return Ok(default_config);
    }

    EngineConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("com", "MetroManDevTeam", "Skyisle").ok_or(ConfigError::NoConfigDir)?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
