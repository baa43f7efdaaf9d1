use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::instrument;

use crate::error::Result;
use crate::model::Table;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Outcome of parsing one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedFile {
    /// The file holds no records at all (zero bytes or only blank lines).
    Empty,
    /// Header plus data rows, every value kept as text.
    Table(Table),
}

/// Reads a tab-delimited file. The first record becomes the header.
///
/// The file handle is released before this function returns.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_table(path: &Path) -> Result<ParsedFile> {
    let file = File::open(path)?;
    read_table_from(file)
}

/// Reads tab-delimited records from any reader.
pub fn read_table_from<R: Read>(reader: R) -> Result<ParsedFile> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut header = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank_record(&record) {
            continue;
        }
        match header {
            None => header = Some(header_values(&record)),
            Some(_) => rows.push(record.iter().map(str::to_string).collect()),
        }
    }

    Ok(match header {
        Some(header) => ParsedFile::Table(Table { header, rows }),
        None => ParsedFile::Empty,
    })
}

/// Lines holding nothing but whitespace and tabs are not records.
fn is_blank_record(record: &StringRecord) -> bool {
    record
        .iter()
        .all(|field| field.trim_start_matches(BYTE_ORDER_MARK).trim().is_empty())
}

fn header_values(record: &StringRecord) -> Vec<String> {
    let mut header: Vec<String> = record.iter().map(str::to_string).collect();
    if let Some(first) = header.first_mut() {
        if let Some(stripped) = first.strip_prefix(BYTE_ORDER_MARK) {
            *first = stripped.to_string();
        }
    }
    header
}
