//! Normalized repository records.

use serde::{Deserialize, Serialize};

/// Column names shared by the tabular export formats, in record field order.
pub const RECORD_COLUMNS: [&str; 8] = [
    "name",
    "full_name",
    "description",
    "star_count",
    "fork_count",
    "primary_language",
    "topics",
    "url",
];

/// One repository returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository description, if the owner set one.
    pub description: Option<String>,

    /// Number of stargazers.
    pub star_count: u32,

    /// Number of forks.
    pub fork_count: u32,

    /// Primary language as detected by GitHub.
    pub primary_language: Option<String>,

    /// Repository topics, in API order.
    pub topics: Vec<String>,

    /// Repository web URL.
    pub url: String,
}

impl RepositoryRecord {
    /// Topics rendered the way tabular formats store them.
    pub fn topics_joined(&self) -> String {
        self.topics.join(", ")
    }

    /// The record as text cells, ordered like [`RECORD_COLUMNS`].
    ///
    /// Missing optional values become empty cells.
    pub fn to_row(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.full_name.clone(),
            self.description.clone().unwrap_or_default(),
            self.star_count.to_string(),
            self.fork_count.to_string(),
            self.primary_language.clone().unwrap_or_default(),
            self.topics_joined(),
            self.url.clone(),
        ]
    }
}

/// Records gathered across every fetched page, in API order.
///
/// Only the fetcher appends; everything downstream reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<RepositoryRecord>);

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, records: impl IntoIterator<Item = RepositoryRecord>) {
        self.0.extend(records);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no records were collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The records in collection order.
    pub fn records(&self) -> &[RepositoryRecord] {
        &self.0
    }

    /// Iterates the records in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, RepositoryRecord> {
        self.0.iter()
    }
}

impl From<Vec<RepositoryRecord>> for ResultSet {
    fn from(records: Vec<RepositoryRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RepositoryRecord;
    type IntoIter = std::slice::Iter<'a, RepositoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RepositoryRecord {
        RepositoryRecord {
            name: "ripgrep".to_string(),
            full_name: "BurntSushi/ripgrep".to_string(),
            description: None,
            star_count: 50000,
            fork_count: 2000,
            primary_language: Some("Rust".to_string()),
            topics: vec!["cli".to_string(), "search".to_string()],
            url: "https://github.com/BurntSushi/ripgrep".to_string(),
        }
    }

    #[test]
    fn to_row_follows_column_order() {
        let row = record().to_row();

        assert_eq!(row.len(), RECORD_COLUMNS.len());
        assert_eq!(row[0], "ripgrep");
        assert_eq!(row[2], "");
        assert_eq!(row[3], "50000");
        assert_eq!(row[5], "Rust");
        assert_eq!(row[6], "cli, search");
        assert_eq!(row[7], "https://github.com/BurntSushi/ripgrep");
    }

    #[test]
    fn result_set_keeps_insertion_order() {
        let mut results = ResultSet::new();
        let mut second = record();
        second.name = "fd".to_string();
        results.extend([record(), second]);

        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ripgrep", "fd"]);
    }

    #[test]
    fn result_set_serializes_as_array() {
        let results = ResultSet::from(vec![record()]);
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["full_name"], "BurntSushi/ripgrep");
        assert_eq!(json[0]["topics"][1], "search");
    }
}
