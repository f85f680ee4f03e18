//! Fetch error types.

use thiserror::Error;

/// Reasons a fetch session stopped before reaching the page limit.
///
/// None of these discard the records gathered from earlier pages.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Request for page {page} failed: {source}")]
    Request {
        page: u32,
        #[source]
        source: octocrab::Error,
    },

    /// The API answered with a non-success status.
    #[error("Failed to fetch page {page}: HTTP {status}, {body}")]
    Status { page: u32, status: u16, body: String },

    /// The body was not a search result page.
    #[error("Malformed response body for page {page}: {source}")]
    MalformedBody {
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}
