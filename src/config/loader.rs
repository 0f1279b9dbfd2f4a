//! Configuration loading and discovery for `metasprite.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::MetaSpriteConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during config discovery.
pub const CONFIG_FILE_NAME: &str = "metasprite.toml";

/// Failure to load `metasprite.toml`
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse metasprite.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// One message per invalid field
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override strict mode
    pub strict: Option<bool>,
    /// Override output scale
    pub scale: Option<u8>,
}

/// Locate the config file to use when none is given on the command line.
///
/// The nearest `metasprite.toml` in the current directory or one of its
/// ancestors wins; otherwise `$XDG_CONFIG_HOME/metasprite/metasprite.toml`
/// (falling back to `~/.config`) is used if it exists.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(|cwd| find_config_from(&cwd)).or_else(find_xdg_config)
}

/// User-level config in the XDG config directory, if present.
pub fn find_xdg_config() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("metasprite").join(CONFIG_FILE_NAME)).filter(|path| path.is_file())
}

/// Nearest `metasprite.toml` in `start` or any of its ancestors.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE_NAME)).find(|path| path.is_file())
}

/// Load `path`, or the discovered config file when `path` is `None`.
///
/// No config file at all yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<MetaSpriteConfig, ConfigError> {
    match path.map(Path::to_path_buf).or_else(find_config) {
        Some(config_path) => load_config_file(&config_path),
        None => Ok(MetaSpriteConfig::default()),
    }
}

/// Load configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<MetaSpriteConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<MetaSpriteConfig, ConfigError> {
    let config: MetaSpriteConfig = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut MetaSpriteConfig, overrides: &CliOverrides) {
    if let Some(strict) = overrides.strict {
        config.chip.strict = strict;
    }

    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }
}
