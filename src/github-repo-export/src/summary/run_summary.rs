//! Run summary types.

use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of pages requested.
    pub pages_requested: u32,

    /// Number of pages fetched successfully.
    pub pages_fetched: u32,

    /// Number of records collected.
    pub records_fetched: usize,

    /// Message of the fetch failure that ended pagination, if any.
    pub fetch_error: Option<String>,

    /// Path of the export file, if one was written.
    pub export_path: Option<PathBuf>,

    /// Message of the export failure, if any.
    pub export_error: Option<String>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(pages_requested: u32) -> Self {
        Self {
            pages_requested,
            ..Default::default()
        }
    }

    /// Returns true if fetching or exporting failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fetch_error.is_some() || self.export_error.is_some()
    }

    /// Returns true if an export file was written.
    #[must_use]
    pub fn exported(&self) -> bool {
        self.export_path.is_some()
    }
}
