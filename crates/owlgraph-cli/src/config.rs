//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory),
//! and applying command-line overrides on top of them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use owlgraph::{
    OwlGraphError,
    config::{AppConfig, Direction, OutputFormat},
};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid command-line override: {0}")]
    Override(String),
}

impl From<ConfigError> for OwlGraphError {
    fn from(err: ConfigError) -> Self {
        OwlGraphError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (owlgraph/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, OwlGraphError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("owlgraph/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("org", "owlgraph", "owlgraph") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Apply the `--format` and `--direction` flags on top of a loaded configuration.
///
/// # Errors
///
/// Returns error if either value is not recognized.
pub fn apply_overrides(
    config: &mut AppConfig,
    format: Option<&str>,
    direction: Option<&str>,
) -> Result<(), OwlGraphError> {
    if let Some(format) = format {
        let format: OutputFormat = format.parse().map_err(ConfigError::Override)?;
        debug!(format:%; "Output format overridden");
        config.renderer_mut().set_format(format);
    }

    if let Some(direction) = direction {
        let direction: Direction = direction.parse().map_err(ConfigError::Override)?;
        debug!(direction:%; "Layout direction overridden");
        config.layout_mut().set_direction(direction);
    }

    Ok(())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, OwlGraphError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
[layout]
direction = "left-to-right"

[style]
node_shape = "ellipse"
background_color = "#fafafa"

[renderer]
program = "/usr/local/bin/dot"
format = "png"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout().direction(), Direction::LeftToRight);
        assert_eq!(config.style().node_shape(), "ellipse");
        assert_eq!(config.style().node_style(), "rounded");
        assert_eq!(config.renderer().program(), "/usr/local/bin/dot");
        assert_eq!(config.renderer().format(), OutputFormat::Png);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nfont_size = 12.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.style().font_size(), 12.0);
        assert_eq!(config.layout().direction(), Direction::TopToBottom);
        assert_eq!(config.renderer().program(), "dot");
        assert_eq!(config.renderer().format(), OutputFormat::Svg);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        match err {
            OwlGraphError::Config(message) => assert!(message.contains("absent.toml")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout\ndirection = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, OwlGraphError::Config(_)));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, Some("png"), Some("lr")).unwrap();

        assert_eq!(config.renderer().format(), OutputFormat::Png);
        assert_eq!(config.layout().direction(), Direction::LeftToRight);
    }

    #[test]
    fn test_absent_overrides_change_nothing() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, None, None).unwrap();

        assert_eq!(config.renderer().format(), OutputFormat::Svg);
        assert_eq!(config.layout().direction(), Direction::TopToBottom);
    }

    #[test]
    fn test_unknown_override_is_an_error() {
        let mut config = AppConfig::default();
        let err = apply_overrides(&mut config, Some("gif"), None).unwrap_err();
        assert!(matches!(err, OwlGraphError::Config(_)));
    }
}
