//! Export format selection.

use crate::export::ExportError;
use std::fmt;
use std::str::FromStr;

/// On-disk serialization of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON array.
    Json,
    /// SQLite database with a `repositories` table.
    Sqlite,
    /// Excel workbook.
    Xlsx,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [ExportFormat; 4] = [Self::Csv, Self::Json, Self::Sqlite, Self::Xlsx];

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Sqlite => "db",
            Self::Xlsx => "xlsx",
        }
    }

    /// Number of the format in the interactive menu.
    pub fn menu_number(&self) -> u8 {
        match self {
            Self::Csv => 1,
            Self::Json => 2,
            Self::Sqlite => 3,
            Self::Xlsx => 4,
        }
    }

    /// Human-readable name shown in menus and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Sqlite => "SQLite Database",
            Self::Xlsx => "Excel",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Accepts a menu number (`1`-`4`) or a format name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "csv" => Ok(Self::Csv),
            "2" | "json" => Ok(Self::Json),
            "3" | "sqlite" | "db" => Ok(Self::Sqlite),
            "4" | "xlsx" | "excel" => Ok(Self::Xlsx),
            _ => Err(ExportError::UnsupportedFormat {
                choice: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers() {
        let parsed: Vec<ExportFormat> = ["1", "2", "3", "4"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(parsed, ExportFormat::ALL);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(" CSV ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("db".parse::<ExportFormat>().unwrap(), ExportFormat::Sqlite);
        assert_eq!("Excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }

    #[test]
    fn rejects_unknown_choice() {
        for choice in ["0", "5", "", "parquet"] {
            let result = choice.parse::<ExportFormat>();
            assert!(matches!(result, Err(ExportError::UnsupportedFormat { .. })));
        }
    }

    #[test]
    fn menu_numbers_round_trip() {
        for format in ExportFormat::ALL {
            let parsed: ExportFormat = format.menu_number().to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }
}
