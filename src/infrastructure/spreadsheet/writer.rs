use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::XlsxWorkbook;
use crate::domain::entities::MergedTable;
use crate::domain::error::MergeError;
use crate::domain::workbook::WorkbookWriter;

impl WorkbookWriter for XlsxWorkbook {
    fn write_table(&self, table: &MergedTable) -> Result<Vec<u8>, MergeError> {
        render(table).map_err(MergeError::merge)
    }
}

/// Single `Sheet1` with a bold header row; a missing score is left blank.
fn render(table: &MergedTable) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, name) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let r = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        if let Some(score) = row.domain_ascore {
            sheet.write_number(r, 0, score)?;
        }
        sheet.write_string(r, 1, &row.domain)?;
        sheet.write_string(r, 2, &row.source_title)?;
        sheet.write_string(r, 3, &row.source_url)?;
    }

    workbook.save_to_buffer()
}
