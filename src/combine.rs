use std::path::PathBuf;

use tracing::{info, instrument};

use crate::error::Result;
use crate::io::discover::find_input_files;
use crate::io::excel_write::write_workbook;
use crate::io::tsv_read::{ParsedFile, read_table};
use crate::workbook::WorkbookBuilder;

/// Parameters of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineRequest {
    /// Directory scanned for input files.
    pub directory: PathBuf,
    /// Workbook written at the end of the run. Relative paths are resolved
    /// against `directory`.
    pub output: PathBuf,
    /// Extension to match, without the leading dot.
    pub extension: String,
}

impl CombineRequest {
    pub fn new(
        directory: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        extension: impl AsRef<str>,
    ) -> Self {
        let extension = extension.as_ref();
        Self {
            directory: directory.into(),
            output: output.into(),
            extension: extension.strip_prefix('.').unwrap_or(extension).to_string(),
        }
    }

    /// Location the workbook is saved to.
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.output)
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOutcome {
    /// Base name of the input file.
    pub source: String,
    /// Name of the sheet in the saved workbook.
    pub sheet: String,
    /// Rows written, header included.
    pub rows: usize,
    /// The input held no records and produced an empty sheet.
    pub empty: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineSummary {
    pub sheets: Vec<SheetOutcome>,
}

impl CombineSummary {
    /// Number of input files combined.
    pub fn file_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Combines every matching file of the request's directory into one
/// workbook, one sheet per file, and saves it.
///
/// Files are processed one at a time in discovery order; each is closed
/// before the next is opened. An input without records yields an empty sheet
/// and a notice on standard output rather than an error.
#[instrument(
    level = "info",
    skip_all,
    fields(
        directory = %request.directory.display(),
        output = %request.output_path().display(),
        extension = %request.extension
    )
)]
pub fn combine(request: &CombineRequest) -> Result<CombineSummary> {
    let files = find_input_files(&request.directory, &request.extension)?;
    info!(file_count = files.len(), "combining input files");

    let mut builder = WorkbookBuilder::new();
    let mut sheets = Vec::with_capacity(files.len());

    for file in &files {
        let parsed = read_table(&file.path)?;
        let (rows, empty) = match &parsed {
            ParsedFile::Empty => {
                println!("Empty sheet created for '{}'", file.base_name);
                (0, true)
            }
            ParsedFile::Table(table) => (table.row_count(), false),
        };

        let sheet = builder.add_sheet(&file.base_name, &parsed).to_string();
        sheets.push(SheetOutcome {
            source: file.base_name.clone(),
            sheet,
            rows,
            empty,
        });
    }

    write_workbook(&request.output_path(), &builder.finish())?;
    Ok(CombineSummary { sheets })
}
