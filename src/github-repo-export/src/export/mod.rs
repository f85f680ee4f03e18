//! Result export.
//!
//! Writes the complete result set to `<output_dir>/<stem>.<ext>` in one of
//! four formats. An empty result set still produces a valid file; deciding
//! whether to export nothing at all is left to the caller.

mod database;
mod delimited;
mod document;
mod error;
mod format;
mod spreadsheet;

pub use database::TABLE_NAME;
pub use error::ExportError;
pub use format::ExportFormat;

use crate::search::ResultSet;
use std::path::{Path, PathBuf};
use tracing::{info, info_span};

/// Writes `results` to `<output_dir>/<stem>.<ext>`.
///
/// The output directory is created if it is missing. Existing files at the
/// target path are replaced.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns an [`ExportError`] if the directory or file cannot be written.
pub fn export(
    results: &ResultSet,
    format: ExportFormat,
    output_dir: &Path,
    stem: &str,
) -> Result<PathBuf, ExportError> {
    let _span = info_span!("export", format = %format, dir = %output_dir.display()).entered();

    std::fs::create_dir_all(output_dir).map_err(|e| ExportError::Io {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let path = output_dir.join(format!("{stem}.{}", format.extension()));
    match format {
        ExportFormat::Csv => delimited::write_csv(results, &path)?,
        ExportFormat::Json => document::write_json(results, &path)?,
        ExportFormat::Sqlite => database::write_sqlite(results, &path)?,
        ExportFormat::Xlsx => spreadsheet::write_xlsx(results, &path)?,
    }

    info!(path = %path.display(), count = results.len(), "Export complete");
    Ok(path)
}

/// Parses a menu choice or format name, then exports.
///
/// An unsupported choice is rejected before anything touches the filesystem.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] for an unknown choice, or any
/// error from [`export`].
pub fn export_choice(
    results: &ResultSet,
    choice: &str,
    output_dir: &Path,
    stem: &str,
) -> Result<PathBuf, ExportError> {
    let format: ExportFormat = choice.parse()?;
    export(results, format, output_dir, stem)
}
