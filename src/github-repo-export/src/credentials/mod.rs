//! Access token resolution.
//!
//! The search API is always called with a static personal access token. The
//! token is read once, before any request is made, and a missing token aborts
//! the run.

mod error;

pub use error::CredentialError;

use tracing::debug;

/// Environment variable holding the token unless configured otherwise.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Reads the access token from the environment variable `var`.
///
/// # Errors
///
/// Returns [`CredentialError::Missing`] if the variable is unset, not valid
/// unicode, or contains only whitespace.
pub fn load_token(var: &str) -> Result<String, CredentialError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(var, "Loaded token from environment");
            Ok(value.trim().to_string())
        }
        _ => Err(CredentialError::Missing {
            var: var.to_string(),
        }),
    }
}

/// Picks an explicitly supplied token, falling back to the environment.
///
/// A blank explicit token is treated as absent.
///
/// # Errors
///
/// Returns [`CredentialError::Missing`] if neither source yields a token.
pub fn resolve_token(explicit: Option<&str>, var: &str) -> Result<String, CredentialError> {
    match explicit.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => load_token(var),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAR: &str = "GITHUB_REPO_EXPORT_TEST_TOKEN";

    #[test]
    fn load_token_reads_variable() {
        temp_env::with_var(VAR, Some("ghp_abc"), || {
            assert_eq!(load_token(VAR).unwrap(), "ghp_abc");
        });
    }

    #[test]
    fn load_token_missing_variable() {
        temp_env::with_var_unset(VAR, || {
            let result = load_token(VAR);
            assert!(matches!(result, Err(CredentialError::Missing { var }) if var == VAR));
        });
    }

    #[test]
    fn load_token_rejects_blank_value() {
        temp_env::with_var(VAR, Some("   "), || {
            assert!(matches!(
                load_token(VAR),
                Err(CredentialError::Missing { .. })
            ));
        });
    }

    #[test]
    fn resolve_token_prefers_explicit_value() {
        temp_env::with_var(VAR, Some("from-env"), || {
            assert_eq!(resolve_token(Some("from-flag"), VAR).unwrap(), "from-flag");
        });
    }

    #[test]
    fn resolve_token_falls_back_to_environment() {
        temp_env::with_var(VAR, Some("from-env"), || {
            assert_eq!(resolve_token(Some(" "), VAR).unwrap(), "from-env");
            assert_eq!(resolve_token(None, VAR).unwrap(), "from-env");
        });
    }
}
