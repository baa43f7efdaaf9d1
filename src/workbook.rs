//! In-memory workbook assembled from the parsed input files.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::coerce::coerce_row;
use crate::io::tsv_read::ParsedFile;
use crate::model::Cell;

/// Name of the blank sheet every new workbook starts with.
pub const DEFAULT_SHEET: &str = "Sheet";
/// Longest sheet name the spreadsheet format accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const RESERVED_SHEET_NAME: &str = "History";

/// A sheet ready to be materialised, holding coerced cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetData {
    fn blank(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Returns `true` when the top-left cell holds no value.
    pub fn first_cell_is_empty(&self) -> bool {
        self.rows
            .first()
            .and_then(|row| row.first())
            .is_none_or(Cell::is_blank)
    }
}

/// All sheets of the output workbook in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookData {
    pub sheets: Vec<SheetData>,
}

/// Accumulates sheets in discovery order.
///
/// The builder starts out with the format's default blank sheet, which
/// [`WorkbookBuilder::finish`] drops again when nothing was written to it and
/// at least one real sheet exists.
#[derive(Debug)]
pub struct WorkbookBuilder {
    default_sheet: SheetData,
    sheets: Vec<SheetData>,
    names: SheetNameRegistry,
}

impl Default for WorkbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookBuilder {
    pub fn new() -> Self {
        Self {
            default_sheet: SheetData::blank(DEFAULT_SHEET),
            sheets: Vec::new(),
            names: SheetNameRegistry::default(),
        }
    }

    /// Appends a sheet for `parsed`, coercing every cell, and returns the name
    /// the sheet was given.
    pub fn add_sheet(&mut self, base_name: &str, parsed: &ParsedFile) -> &str {
        let name = self.names.assign(base_name);
        if name != base_name {
            warn!(requested = base_name, assigned = %name, "sheet renamed");
        }

        let rows = match parsed {
            ParsedFile::Empty => Vec::new(),
            ParsedFile::Table(table) => table.all_rows().map(coerce_row).collect(),
        };
        debug!(sheet = %name, row_count = rows.len(), "sheet added");

        self.sheets.push(SheetData { name, rows });
        let added = self.sheets.len() - 1;
        &self.sheets[added].name
    }

    /// Completes the workbook.
    pub fn finish(self) -> WorkbookData {
        let mut sheets = Vec::with_capacity(self.sheets.len() + 1);
        if !(self.default_sheet.first_cell_is_empty() && !self.sheets.is_empty()) {
            sheets.push(self.default_sheet);
        }
        sheets.extend(self.sheets);
        WorkbookData { sheets }
    }
}

/// Hands out unique sheet names. Comparison ignores case, as spreadsheet
/// applications do.
#[derive(Debug, Default)]
struct SheetNameRegistry {
    used: HashSet<String>,
}

impl SheetNameRegistry {
    fn assign(&mut self, raw: &str) -> String {
        let base = sanitize_sheet_name(raw);
        if self.used.insert(base.to_lowercase()) {
            return base;
        }

        let mut counter = 2;
        loop {
            let suffix = format!("_{counter}");
            let max_len = MAX_SHEET_NAME_LEN - suffix.chars().count();
            let prefix: String = base.chars().take(max_len).collect();
            let candidate = format!("{prefix}{suffix}");
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Maps an arbitrary file stem onto a name the spreadsheet format accepts.
pub fn sanitize_sheet_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|ch| {
            if INVALID_SHEET_CHARS.contains(&ch) || ch.is_control() {
                '_'
            } else {
                ch
            }
        })
        .collect();

    let truncated: String = replaced
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let sanitized = truncated.trim_end_matches('\'');

    if sanitized.is_empty() {
        DEFAULT_SHEET.to_string()
    } else if sanitized.eq_ignore_ascii_case(RESERVED_SHEET_NAME) {
        format!("{sanitized}_")
    } else {
        sanitized.to_string()
    }
}
