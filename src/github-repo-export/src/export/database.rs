//! SQLite writer.

use crate::export::ExportError;
use crate::search::ResultSet;
use rusqlite::{params, Connection};
use std::path::Path;

/// Table the records are written to.
pub const TABLE_NAME: &str = "repositories";

/// Drops and recreates [`TABLE_NAME`].
fn create_table_sql() -> String {
    format!(
        "DROP TABLE IF EXISTS {TABLE_NAME};
CREATE TABLE {TABLE_NAME} (
    name TEXT NOT NULL,
    full_name TEXT NOT NULL,
    description TEXT,
    star_count INTEGER NOT NULL,
    fork_count INTEGER NOT NULL,
    primary_language TEXT,
    topics TEXT NOT NULL,
    url TEXT NOT NULL
);"
    )
}

fn insert_row_sql() -> String {
    format!(
        "INSERT INTO {TABLE_NAME}
    (name, full_name, description, star_count, fork_count, primary_language, topics, url)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
    )
}

/// Replaces the [`TABLE_NAME`] table with the records.
///
/// Any existing table of that name is dropped first, so repeated exports to
/// the same database never append.
pub(crate) fn write_sqlite(results: &ResultSet, path: &Path) -> Result<(), ExportError> {
    let mut conn = Connection::open(path)?;
    let tx = conn.transaction()?;
    tx.execute_batch(&create_table_sql())?;

    {
        let mut stmt = tx.prepare(&insert_row_sql())?;
        for record in results {
            stmt.execute(params![
                record.name,
                record.full_name,
                record.description,
                i64::from(record.star_count),
                i64::from(record.fork_count),
                record.primary_language,
                record.topics_joined(),
                record.url,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}
