//! Settings file deserialization.

use crate::config::ConfigError;
use crate::credentials::DEFAULT_TOKEN_ENV;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Tool settings, read from an optional TOML file.
///
/// Every key is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Directory the export files are written to.
    pub output_dir: PathBuf,

    /// File name (without extension) of the export file.
    pub file_stem: String,

    /// Base URL of the GitHub REST API.
    pub api_base_url: String,

    /// Connect and read timeout for each request, in seconds.
    pub timeout_secs: u64,

    /// Environment variable the access token is read from.
    pub token_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(default_output_dir()),
            file_stem: default_file_stem().to_string(),
            api_base_url: default_api_base_url().to_string(),
            timeout_secs: default_timeout_secs(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlError`] for malformed TOML or unknown keys.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::TomlError {
            path: origin.display().to_string(),
            source: e,
        })
    }

    /// Checks that the values can be used for a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first bad value.
    pub fn validate(&self, origin: &Path) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::ValidationError {
            path: origin.display().to_string(),
            message: message.to_string(),
        };

        if self.file_stem.trim().is_empty() {
            return Err(invalid("file-stem must not be empty"));
        }
        if self.file_stem.contains(['/', '\\']) {
            return Err(invalid("file-stem must not contain path separators"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout-secs must be greater than zero"));
        }
        if self.token_env.trim().is_empty() {
            return Err(invalid("token-env must not be empty"));
        }
        if Url::parse(&self.api_base_url).is_err() {
            return Err(invalid("api-base-url is not a valid URL"));
        }

        Ok(())
    }
}

pub(crate) fn default_output_dir() -> &'static str {
    "data"
}

pub(crate) fn default_file_stem() -> &'static str {
    "github_api_results"
}

pub(crate) fn default_api_base_url() -> &'static str {
    "https://api.github.com"
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}
