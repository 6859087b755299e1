use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use super::XlsxWorkbook;
use crate::domain::error::MergeError;
use crate::domain::table::{Cell, Table};
use crate::domain::workbook::WorkbookReader;

impl WorkbookReader for XlsxWorkbook {
    fn read_table(&self, data: &[u8]) -> Result<Table, MergeError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(MergeError::merge)?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(MergeError::merge)?,
            None => return Ok(Table::default()),
        };

        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .map(|cell| to_cell(cell).to_text().unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();
        let rows = rows.map(|row| row.iter().map(to_cell).collect()).collect();

        Ok(Table::new(headers, rows))
    }
}

/// Date cells become their serial number; error cells read as empty.
fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
    }
}
