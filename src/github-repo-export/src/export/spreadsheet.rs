//! Excel writer.

use crate::export::ExportError;
use crate::search::{ResultSet, RECORD_COLUMNS};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "repositories";

/// Writes a single worksheet with a bold header row.
///
/// Star and fork counts are stored as numbers, everything else as text.
pub(crate) fn write_xlsx(results: &ResultSet, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in (0u16..).zip(RECORD_COLUMNS) {
        worksheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row, record) in (1u32..).zip(results) {
        worksheet.write_string(row, 0, &record.name)?;
        worksheet.write_string(row, 1, &record.full_name)?;
        worksheet.write_string(row, 2, record.description.as_deref().unwrap_or_default())?;
        worksheet.write_number(row, 3, f64::from(record.star_count))?;
        worksheet.write_number(row, 4, f64::from(record.fork_count))?;
        worksheet.write_string(row, 5, record.primary_language.as_deref().unwrap_or_default())?;
        worksheet.write_string(row, 6, record.topics_joined())?;
        worksheet.write_string(row, 7, &record.url)?;
    }

    workbook.save(path)?;
    Ok(())
}
