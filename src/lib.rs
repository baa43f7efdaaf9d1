//! Core library for the tsv-workbook command line application.
//!
//! The tool gathers the tab-delimited files of one directory into a single
//! Excel workbook. IO adapters live under [`io`] (file discovery, record
//! parsing, workbook persistence), cell values in [`model`], numeric
//! interpretation in [`coerce`], sheet assembly in [`workbook`], and the
//! end-to-end run in [`combine`].

pub mod coerce;
pub mod combine;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod workbook;

pub use combine::{CombineRequest, CombineSummary, SheetOutcome, combine};
pub use error::{Result, ToolError};
