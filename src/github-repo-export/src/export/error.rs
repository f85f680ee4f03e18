//! Export error types.

use thiserror::Error;

/// Errors that can occur while exporting a result set.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format is not one of the supported choices.
    #[error(
        "Unsupported export format '{choice}'; choose 1 (CSV), 2 (JSON), 3 (SQLite) or 4 (Excel)"
    )]
    UnsupportedFormat { choice: String },

    /// Failed to create the output directory or file.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or write error.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding or write error.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite error.
    #[error("Failed to write SQLite database: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Spreadsheet encoding or write error.
    #[error("Failed to write Excel workbook: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

impl ExportError {
    /// Returns true for failures that happened while writing output, as
    /// opposed to a rejected format choice.
    pub fn is_io_failure(&self) -> bool {
        !matches!(self, Self::UnsupportedFormat { .. })
    }
}
