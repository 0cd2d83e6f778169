//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the start form, theme, log level and terminal tick rate.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::events::terminal::DEFAULT_TICK_RATE_IN_MS;
use crate::forms::FormKind;
use crate::ui::Theme;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/fieldcheck";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub start_form: FormKind,
    pub tick_rate_ms: u64,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub start_form: FormKind,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_IN_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default settings.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            start_form: FormKind::default(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write the current
    /// settings there so the user has a file to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.start_form = data.start_form;
            self.tick_rate_ms = data.tick_rate_ms;
            self.log_level = data.log_level;
        } else {
            info!("Writing default configuration to {}", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            start_form: self.start_form,
            tick_rate_ms: self.tick_rate_ms,
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Parse the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Return the configured theme, falling back to the default for unknown
    /// names.
    ///
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', available themes: {}",
                self.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        })
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
