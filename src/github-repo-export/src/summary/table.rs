//! Terminal summary table.

use crate::search::ResultSet;
use comfy_table::{Cell, Table};
use std::io::Write;

/// Maximum number of records shown in the summary.
pub const SUMMARY_ROWS: usize = 5;

/// Writes a table of the first [`SUMMARY_ROWS`] records to `out`.
///
/// Records are shown in collection order. An empty set only writes a notice.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_summary<W: Write>(results: &ResultSet, out: &mut W) -> std::io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No repositories found.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Name"),
        Cell::new("Stars"),
        Cell::new("Language"),
        Cell::new("URL"),
    ]);

    for record in results.iter().take(SUMMARY_ROWS) {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.star_count),
            Cell::new(record.primary_language.as_deref().unwrap_or_default()),
            Cell::new(&record.url),
        ]);
    }

    writeln!(out, "GitHub Repository Summary")?;
    writeln!(out, "{table}")
}
