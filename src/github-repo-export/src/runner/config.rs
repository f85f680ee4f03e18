//! Runner configuration.

use crate::config::{ConfigError, Settings};
use crate::search::SearchFilters;
use std::collections::BTreeMap;

/// Everything needed for one run, independent of how it was collected.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Search query, without filter qualifiers.
    query: String,
    /// Whether `filters` are sent with the search.
    apply_filters: bool,
    /// Language, sort and order filters.
    filters: SearchFilters,
    /// Maximum number of pages to request.
    max_pages: u32,
    /// Raw export format choice (menu number or name).
    export_choice: Option<String>,
    /// Explicit token; the environment is used when absent.
    token: Option<String>,
    /// Output, API and credential settings.
    settings: Settings,
}

impl RunConfig {
    /// Creates a configuration with default settings and no filters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] if `query` is blank or
    /// `max_pages` is zero.
    pub fn new(query: impl Into<String>, max_pages: u32) -> Result<Self, ConfigError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ConfigError::InvalidArgument {
                name: "query".to_string(),
                message: "search query must not be empty".to_string(),
            });
        }
        if max_pages == 0 {
            return Err(ConfigError::InvalidArgument {
                name: "pages".to_string(),
                message: "page count must be at least 1".to_string(),
            });
        }

        Ok(Self {
            query: query.trim().to_string(),
            apply_filters: false,
            filters: SearchFilters::default(),
            max_pages,
            export_choice: None,
            token: None,
            settings: Settings::default(),
        })
    }

    /// Enables the given filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.apply_filters = true;
        self.filters = filters;
        self
    }

    /// Sets the export format choice used by [`Runner::run`](crate::Runner::run).
    pub fn with_export_choice(mut self, choice: impl Into<String>) -> Self {
        self.export_choice = Some(choice.into());
        self
    }

    /// Sets an explicit access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the search query as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns whether filters are applied.
    pub fn apply_filters(&self) -> bool {
        self.apply_filters
    }

    /// Returns the page limit.
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Returns the export format choice, if any.
    pub fn export_choice(&self) -> Option<&str> {
        self.export_choice.as_deref()
    }

    /// Returns the explicit token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The `q` parameter sent to the API, qualifiers included.
    pub fn search_query(&self) -> String {
        if self.apply_filters {
            self.filters.qualify_query(&self.query)
        } else {
            self.query.clone()
        }
    }

    /// Extra parameters sent with every page request.
    pub fn search_params(&self) -> BTreeMap<String, String> {
        if self.apply_filters {
            self.filters.to_params()
        } else {
            BTreeMap::new()
        }
    }
}
