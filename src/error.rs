use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool discovers, parses, or writes data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a delimited input file cannot be tokenised.
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the working directory does not exist.
    #[error("working directory not found: {0}")]
    MissingDirectory(PathBuf),

    /// Raised when the working directory exists but cannot be listed.
    #[error("cannot list working directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when no file in the working directory carries the extension.
    #[error("No {extension} files found in the working directory.")]
    NoMatchingFiles { extension: String },

    /// Raised when a table does not fit the worksheet grid.
    #[error("sheet '{sheet}' exceeds the worksheet grid at row {row}, column {column}")]
    SheetLimit {
        sheet: String,
        row: usize,
        column: usize,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
