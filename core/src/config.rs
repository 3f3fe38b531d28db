//! Handles the configuration of cadenza.
//!
//! this module is responsible for parsing the Cadenza.toml file, layering environment variables
//! and cli overrides on top of it.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use std::{path::PathBuf, str::FromStr};

use cadenza_storage::db::CatalogOptions;

pub static DEFAULT_CONFIG: &str = include_str!("../Cadenza.toml");

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Settings for how the catalog validates new records
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Settings for logging
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from the config file, environment variables, and CLI arguments.
    ///
    /// The environment variables are prefixed with `CADENZA_`, and nested keys are separated by `__`,
    /// e.g. `CADENZA_CATALOG__UNIQUE_MOBILES=true`.
    ///
    /// # Arguments
    ///
    /// * `config` - The path to the config file.
    /// * `log_level` - Overrides the configured log level, if set.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(config: PathBuf, log_level: Option<log::LevelFilter>) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("CADENZA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(log_level) = log_level {
            settings.log.level = log_level;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        match crate::get_config_dir() {
            Ok(config_dir) => {
                // if the config directory does not exist, create it
                if !config_dir.exists() {
                    std::fs::create_dir_all(&config_dir)?;
                }
                let config_file = config_dir.join("Cadenza.toml");

                if !config_file.exists() {
                    std::fs::write(&config_file, DEFAULT_CONFIG)?;
                }

                Ok(config_file)
            }
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::NotFound, e)),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Reject new users whose mobile number is already registered.
    /// Default is false: duplicates are accepted, and lookups resolve to the first user.
    #[serde(default)]
    pub unique_mobiles: bool,
}

impl From<CatalogSettings> for CatalogOptions {
    #[inline]
    fn from(settings: CatalogSettings) -> Self {
        Self {
            unique_mobiles: settings.unique_mobiles,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct LogSettings {
    /// What level of logging to use.
    /// Default is "info".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub level: log::LevelFilter,
    /// Whether to print a tracing span for every catalog operation.
    #[serde(default)]
    pub tracing: bool,
}

impl Default for LogSettings {
    #[inline]
    fn default() -> Self {
        Self {
            level: default_log_level(),
            tracing: false,
        }
    }
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}
