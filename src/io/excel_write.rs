use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::{info, instrument};

use crate::error::{Result, ToolError};
use crate::model::Cell;
use crate::workbook::{SheetData, WorkbookData};

/// Rows available on a single worksheet.
pub const MAX_ROWS: usize = 1_048_576;
/// Columns available on a single worksheet.
pub const MAX_COLUMNS: usize = 16_384;

/// Writes the provided workbook data to the given path, replacing any file
/// already there.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_workbook(path: &Path, workbook: &WorkbookData) -> Result<()> {
    let mut workbook_writer = Workbook::new();

    for sheet in &workbook.sheets {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        write_sheet(worksheet, sheet)?;
    }

    workbook_writer.save(path)?;
    info!(sheet_count = workbook.sheets.len(), "workbook saved");
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &SheetData) -> Result<()> {
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_blank() {
                continue;
            }
            let (row_num, col_num) = grid_position(sheet, row_idx, col_idx)?;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col_num, text)?;
                }
                Cell::Integer(value) => {
                    worksheet.write_number(row_num, col_num, *value as f64)?;
                }
                Cell::Float(value) => {
                    worksheet.write_number(row_num, col_num, *value)?;
                }
            }
        }
    }
    Ok(())
}

fn grid_position(sheet: &SheetData, row: usize, column: usize) -> Result<(u32, u16)> {
    if row >= MAX_ROWS || column >= MAX_COLUMNS {
        return Err(ToolError::SheetLimit {
            sheet: sheet.name.clone(),
            row: row + 1,
            column: column + 1,
        });
    }
    Ok((row as u32, column as u16))
}
