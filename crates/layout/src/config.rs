// SPDX-License-Identifier: MIT

//!
//! TimelineGrid layout config
//!

use crate::{LARGE_WINDOW_COLUMNS, LayoutParams, PackingStrategy, ViewportLimits};
use directories_next::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "TimelineGrid";
const APPLICATION_NAME: &str = "TimelineGrid";
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can arise when loading or saving the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// The config that's saved to disk.  Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Windows with more columns than this need confirming before layout
    pub large_window_columns: i64,

    /// How row occupancy is tracked while packing
    pub packing_strategy: PackingStrategy,

    /// Zoom bounds and wheel step, for the frontend drawing the timeline (the
    /// command line tool doesn't zoom)
    pub viewport: ViewportLimits,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            large_window_columns: LARGE_WINDOW_COLUMNS,
            packing_strategy: PackingStrategy::default(),
            viewport: ViewportLimits::default(),
        }
    }
}

impl Config {
    /// Load (and validate) the config at the given path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {path:?}");
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Load the config from `path` if given.  Otherwise load it from the
    /// platform's config directory if a config has been saved there, falling
    /// back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Config::load(path);
        }
        match default_path() {
            Ok(path) if path.exists() => Config::load(&path),
            Ok(path) => {
                info!("No config file at {path:?}, using defaults");
                Ok(Config::default())
            }
            Err(_) => {
                info!("No config directory, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Save the config to the given path (creating its directory if need be).
    /// For frontends with a settings screen, e.g. to [`default_path`].
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving config to {path:?}");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Config saved");
        Ok(())
    }

    /// Check the values make sense together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.large_window_columns < 1 {
            return Err(ConfigError::Invalid(format!(
                "large_window_columns must be at least 1 (got {})",
                self.large_window_columns
            )));
        }
        let ViewportLimits {
            min_scale,
            max_scale,
            wheel_factor,
        } = self.viewport;
        if !(min_scale > 0.0 && min_scale <= max_scale && max_scale.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "viewport scale limits must satisfy 0 < min_scale <= max_scale (got {min_scale} and {max_scale})"
            )));
        }
        if !(wheel_factor > 1.0 && wheel_factor.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "viewport wheel_factor must be greater than 1 (got {wheel_factor})"
            )));
        }
        Ok(())
    }

    /// The parameters to give the layout engine
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            large_window_columns: self.large_window_columns,
            packing_strategy: self.packing_strategy,
        }
    }
}

/// Get the project directories (e.g. where the config is stored)
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME).ok_or(ConfigError::NoConfigDir)
}

/// Get the path to the config in the platform's config directory
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    info!("Config file path = {config_file:?}");
    Ok(config_file)
}
