use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Represents a single cell after numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Digit-only text interpreted as a whole number.
    Integer(i64),
    /// Text that parsed as a finite decimal number.
    Float(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl Cell {
    /// Returns `true` when the cell carries no content at all.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(text) if text.is_empty())
    }
}

/// Raw rows read from one delimited file. Every value is still text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names taken from the first record. Uniqueness is not enforced.
    pub header: Vec<String>,
    /// Remaining records in file order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Iterates over the header followed by every data row.
    pub fn all_rows(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}

/// A file selected for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Location of the file inside the working directory.
    pub path: PathBuf,
    /// File name with its last extension removed; becomes the sheet name.
    pub base_name: String,
}
