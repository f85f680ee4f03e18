//! Paginated repository search.
//!
//! Pages are requested one at a time, in order, and their items appended to a
//! [`ResultSet`]. The first failed page ends the session; whatever was
//! collected before it is kept.

mod client;
mod error;
mod filters;
mod record;
mod response;

pub use client::build_client;
pub use error::FetchError;
pub use filters::{SearchFilters, SortKey, SortOrder};
pub use record::{RepositoryRecord, ResultSet, RECORD_COLUMNS};

use octocrab::Octocrab;
use response::SearchPage;
use std::collections::BTreeMap;
use tracing::{debug, info, info_span, warn, Instrument};

/// Results requested per page.
pub const PAGE_SIZE: u32 = 30;

/// Repository search endpoint, relative to the API base URL.
const SEARCH_ROUTE: &str = "/search/repositories";

/// Progress report for one successfully fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based page index.
    pub page: u32,
    /// Page limit of the session.
    pub max_pages: u32,
    /// Items on this page.
    pub items: usize,
    /// Records collected so far, this page included.
    pub total: usize,
}

/// Result of a fetch session.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Records from every page fetched successfully.
    pub records: ResultSet,

    /// Number of pages that returned a usable body.
    pub pages_fetched: u32,

    /// Why the session stopped early, if it did.
    pub failure: Option<FetchError>,
}

impl FetchOutcome {
    /// Returns true if a page failed.
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Fetches up to `max_pages` pages of repositories matching `query`.
///
/// `filters` are added to every request after the base parameters, so a
/// filter with the same key as a base parameter (`q`, `page`, `per_page`)
/// replaces it. A page with no items ends pagination. `on_page` is called
/// after each page that was fetched and parsed.
///
/// Failures never discard earlier pages: they are returned in
/// [`FetchOutcome::failure`] alongside the partial records.
pub async fn fetch_all<F>(
    octocrab: &Octocrab,
    query: &str,
    max_pages: u32,
    filters: &BTreeMap<String, String>,
    mut on_page: F,
) -> FetchOutcome
where
    F: FnMut(&PageProgress),
{
    let span = info_span!("fetch", query = %query, max_pages);

    async {
        info!("Starting repository search");
        let mut outcome = FetchOutcome::default();

        for page in 1..=max_pages {
            let params = build_params(query, page, filters);

            let search_page = match fetch_page(octocrab, page, &params).await {
                Ok(search_page) => search_page,
                Err(e) => {
                    warn!(page, error = %e, "Stopping pagination");
                    outcome.failure = Some(e);
                    break;
                }
            };

            outcome.pages_fetched = page;
            let items = search_page.items.len();
            outcome
                .records
                .extend(search_page.items.into_iter().map(RepositoryRecord::from));

            let progress = PageProgress {
                page,
                max_pages,
                items,
                total: outcome.records.len(),
            };
            info!(page, items, total = progress.total, "Fetched page");
            on_page(&progress);

            if items == 0 {
                info!(page, "Empty page, no further results");
                break;
            }
        }

        info!(
            count = outcome.records.len(),
            pages = outcome.pages_fetched,
            failed = outcome.failed(),
            "Search complete"
        );
        outcome
    }
    .instrument(span)
    .await
}

/// Builds the parameter map for one page request.
///
/// Caller filters are inserted last and win on key collisions.
fn build_params(
    query: &str,
    page: u32,
    filters: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("q".to_string(), query.to_string());
    params.insert("per_page".to_string(), PAGE_SIZE.to_string());
    params.insert("page".to_string(), page.to_string());
    params.extend(filters.iter().map(|(k, v)| (k.clone(), v.clone())));
    params
}

/// Requests and parses a single page.
async fn fetch_page(
    octocrab: &Octocrab,
    page: u32,
    params: &BTreeMap<String, String>,
) -> Result<SearchPage, FetchError> {
    let query_string = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    let route = format!("{SEARCH_ROUTE}?{query_string}");
    debug!(page, route = %route, "Requesting page");

    let response = octocrab
        ._get(route)
        .await
        .map_err(|e| FetchError::Request { page, source: e })?;
    let status = response.status();
    let body = octocrab
        .body_to_string(response)
        .await
        .map_err(|e| FetchError::Request { page, source: e })?;

    if !status.is_success() {
        return Err(FetchError::Status {
            page,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| FetchError::MalformedBody { page, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_params_sets_base_fields() {
        let params = build_params("tokio", 2, &BTreeMap::new());

        assert_eq!(params["q"], "tokio");
        assert_eq!(params["per_page"], "30");
        assert_eq!(params["page"], "2");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn build_params_filters_win_on_collision() {
        let filters = BTreeMap::from([
            ("q".to_string(), "language:rust".to_string()),
            ("sort".to_string(), "stars".to_string()),
        ]);

        let params = build_params("tokio", 1, &filters);

        assert_eq!(params["q"], "language:rust");
        assert_eq!(params["sort"], "stars");
        assert_eq!(params["page"], "1");
    }
}
