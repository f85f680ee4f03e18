//! Settings loading.
//!
//! Settings come from an optional TOML file. When no file is given the
//! built-in defaults are used, so the tool works without any configuration
//! beyond the access token.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use std::path::Path;
use tracing::{debug, info};

/// Loads and validates settings from `path`.
///
/// ```toml
/// output-dir = "data"
/// file-stem = "github_api_results"
/// api-base-url = "https://api.github.com"
/// timeout-secs = 30
/// token-env = "GITHUB_TOKEN"
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file does not exist, or an
/// I/O, parse or validation error otherwise.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    info!(path = %path.display(), "Loading settings");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings = Settings::from_toml_str(&contents, path)?;
    settings.validate(path)?;

    debug!(?settings, "Loaded settings");
    Ok(settings)
}

/// Loads settings from `path` if one is given, or returns the defaults.
///
/// # Errors
///
/// Propagates any error from [`load_settings`].
pub fn load_settings_or_default(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(Settings::default()),
    }
}
