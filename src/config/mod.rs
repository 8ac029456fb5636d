pub mod logging_config;
pub mod profile_config;

use std::path::Path;

use anyhow::{Result, bail};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::logging_config::LoggingConfig;
use crate::config::profile_config::WfdProfile;
use crate::utils::ensure_directory_exists;

/// Default file name looked up when no configuration path is given
pub const CONFIG_FILE_NAME: &str = "wfd_config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub profile: WfdProfile,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the config from a configuration file.
    pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();
        let file_path_str = file_path.to_string_lossy().into_owned();

        if !file_path.exists() {
            warn!(
                "Config file not found at {:?}, using default.",
                file_path_str
            );
            return Ok(Self::default());
        }

        let config_json = fs::read_to_string(file_path).await?;
        let config: Self = serde_json::from_str(&config_json)?;

        info!("Config loaded from {:?}", file_path_str);
        Ok(config)
    }

    /// Loads the config, falling back to the default when the file cannot be read or parsed.
    /// Runs before the logger is installed, so the warning goes straight to stderr.
    pub async fn load_config_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_config(path.as_ref()).await {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: ignoring config at {:?}: {}",
                    path.as_ref().to_string_lossy(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Writes a new config file. An existing file is only replaced when `overwrite` is set.
    pub async fn create_config<P: AsRef<Path>>(&self, path: P, overwrite: bool) -> Result<()> {
        let file_path = path.as_ref();
        if file_path.exists() && !overwrite {
            bail!(
                "Config file already exists at {:?}, pass --force to replace it",
                file_path.to_string_lossy()
            );
        }
        self.save_config(file_path).await
    }

    /// Saves the current config to a configuration file.
    pub async fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file_path = path.as_ref();
        if let Some(config_dir) = file_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            ensure_directory_exists(config_dir).await?;
        }
        let file_path_str = file_path.to_string_lossy().into_owned();

        let config_json = match serde_json::to_string_pretty(&self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize config to JSON: {}", e);
                return Err(e.into());
            }
        };

        fs::write(file_path, config_json).await?;

        info!("Config saved to {:?}.", file_path_str);
        Ok(())
    }
}
