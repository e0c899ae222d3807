//! Application configuration.

use crate::consts::cli_consts::{DEFAULT_LOCATION, load_cycle::SIMULATED_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Location loaded at startup.
    pub default_location: String,
    /// Artificial delay of the simulated provider, in milliseconds.
    pub delay_ms: u64,
    /// Probability in `[0, 1]` that a simulated load cycle fails.
    pub failure_rate: f64,
    /// Whether the TUI paints its own background color.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION.to_string(),
            delay_ms: SIMULATED_DELAY_MS,
            failure_rate: 0.0,
            with_background_color: false,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults when it does not.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Path of the config file, `~/.weather-dash/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".weather-dash").join("config.json"))
}
