//! Search API response bodies.

use crate::search::RepositoryRecord;
use serde::Deserialize;

/// One page of `GET /search/repositories`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPage {
    /// Matching repositories. Absent on some error-shaped bodies.
    #[serde(default)]
    pub(crate) items: Vec<SearchItem>,
}

/// One repository item as returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    name: String,
    full_name: String,
    #[serde(default)]
    description: Option<String>,
    stargazers_count: u32,
    forks_count: u32,
    #[serde(default)]
    language: Option<String>,
    /// Sent as `null` for some repositories, not just omitted.
    #[serde(default)]
    topics: Option<Vec<String>>,
    html_url: String,
}

impl From<SearchItem> for RepositoryRecord {
    fn from(item: SearchItem) -> Self {
        Self {
            name: item.name,
            full_name: item.full_name,
            description: item.description,
            star_count: item.stargazers_count,
            fork_count: item.forks_count,
            primary_language: item.language,
            topics: item.topics.unwrap_or_default(),
            url: item.html_url,
        }
    }
}
