//! Credential error types.

use thiserror::Error;

/// Errors that can occur while resolving the API credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The token variable is unset or blank.
    #[error("GitHub token not found; set {var} in the environment or a .env file")]
    Missing { var: String },
}
