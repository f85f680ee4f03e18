//! Optional search filters.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Field the API sorts results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Stars,
    Forks,
}

impl SortKey {
    /// Value of the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the API-side sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Value of the `order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters passed to the search API. Sorting happens remotely, never locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restricts results to a primary language.
    pub language: Option<String>,

    /// Remote sort key.
    pub sort: Option<SortKey>,

    /// Remote sort direction.
    pub order: Option<SortOrder>,
}

impl SearchFilters {
    /// Builds filters from raw user input.
    ///
    /// Blank values are treated as absent. Unrecognized sort keys or orders
    /// are dropped with a warning instead of failing the run.
    pub fn from_input(language: Option<&str>, sort: Option<&str>, order: Option<&str>) -> Self {
        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        Self {
            language,
            sort: parse_or_ignore(sort, "sort"),
            order: parse_or_ignore(order, "order"),
        }
    }

    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.sort.is_none() && self.order.is_none()
    }

    /// Appends the `language:` qualifier to `query`.
    pub fn qualify_query(&self, query: &str) -> String {
        match &self.language {
            Some(language) => format!("{} language:{}", query.trim(), language),
            None => query.trim().to_string(),
        }
    }

    /// Extra query parameters for the search request.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(sort) = self.sort {
            params.insert("sort".to_string(), sort.to_string());
        }
        if let Some(order) = self.order {
            params.insert("order".to_string(), order.to_string());
        }
        params
    }
}

fn parse_or_ignore<T: FromStr<Err = String>>(value: Option<&str>, field: &str) -> Option<T> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(invalid) => {
            warn!(field, value = %invalid, "Ignoring unrecognized filter value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_parses_valid_values() {
        let filters = SearchFilters::from_input(Some("Rust"), Some("Stars"), Some("desc"));

        assert_eq!(filters.language.as_deref(), Some("Rust"));
        assert_eq!(filters.sort, Some(SortKey::Stars));
        assert_eq!(filters.order, Some(SortOrder::Desc));
    }

    #[test]
    fn from_input_ignores_invalid_values() {
        let filters = SearchFilters::from_input(Some("  "), Some("watchers"), Some("sideways"));
        assert!(filters.is_empty());
    }

    #[test]
    fn qualify_query_appends_language() {
        let filters = SearchFilters::from_input(Some("go"), None, None);
        assert_eq!(filters.qualify_query(" cli tool "), "cli tool language:go");
        assert_eq!(SearchFilters::default().qualify_query("cli"), "cli");
    }

    #[test]
    fn to_params_contains_only_set_values() {
        let filters = SearchFilters::from_input(None, Some("forks"), None);
        let params = filters.to_params();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("sort").map(String::as_str), Some("forks"));
    }
}
