//! Runner error types.

/// Errors that abort a run.
///
/// Fetch and export failures are not in here: they are reported to the
/// output and recorded in the [`RunSummary`](crate::RunSummary) instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The access token could not be resolved.
    #[error(transparent)]
    Credential(#[from] crate::credentials::CredentialError),

    /// Settings or run parameters are invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
