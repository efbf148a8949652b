//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use sketchwright::{SketchError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for SketchError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingFile(_) => SketchError::Io(io::Error::new(io::ErrorKind::NotFound, err.to_string())),
            ConfigError::Parse(_) => SketchError::invalid_input(err.to_string()),
        }
    }
}

/// Relative path checked before the platform config directory
const LOCAL_CONFIG: &str = "sketchwright/config.toml";

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (sketchwright/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SketchError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    match search_paths().into_iter().find(|path| path.exists()) {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit configuration locations, in priority order
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];

    match ProjectDirs::from("com", "sketchwright", "sketchwright") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }

    paths
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails, including invalid color values
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SketchError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
