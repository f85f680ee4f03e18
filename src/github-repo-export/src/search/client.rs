//! GitHub client construction.

use crate::config::Settings;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::debug;

/// Builds an authenticated client for the configured API base URL.
///
/// Retries are disabled: a failed page ends the fetch session.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the client cannot be built.
pub fn build_client(token: &str, settings: &Settings) -> Result<Octocrab, octocrab::Error> {
    let timeout = Some(Duration::from_secs(settings.timeout_secs));
    debug!(
        base_url = %settings.api_base_url,
        timeout_secs = settings.timeout_secs,
        "Building GitHub client"
    );

    Octocrab::builder()
        .base_uri(settings.api_base_url.as_str())?
        .personal_token(token.to_string())
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(timeout)
        .set_read_timeout(timeout)
        .build()
}
