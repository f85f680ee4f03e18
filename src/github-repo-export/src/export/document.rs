//! JSON writer.

use crate::export::ExportError;
use crate::search::ResultSet;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Writes the records as an indented JSON array.
pub(crate) fn write_json(results: &ResultSet, path: &Path) -> Result<(), ExportError> {
    let io_error = |e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    results.serialize(&mut serializer)?;

    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)
}
