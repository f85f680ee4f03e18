//! CSV writer.

use crate::export::ExportError;
use crate::search::{ResultSet, RECORD_COLUMNS};
use std::path::Path;

/// Writes a header row and one row per record.
pub(crate) fn write_csv(results: &ResultSet, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(RECORD_COLUMNS)?;
    for record in results {
        writer.write_record(record.to_row())?;
    }

    writer.flush().map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
