//! Excel workbook codec.
//!
//! [`XlsxWorkbook`] implements both [`WorkbookReader`] (via `calamine`, which
//! auto-detects `.xlsx` and legacy `.xls` content) and [`WorkbookWriter`]
//! (via `rust_xlsxwriter`). Both directions work on in-memory buffers, so no
//! temporary files are created.
//!
//! [`WorkbookReader`]: crate::domain::workbook::WorkbookReader
//! [`WorkbookWriter`]: crate::domain::workbook::WorkbookWriter

mod reader;
mod writer;

/// File extensions accepted as spreadsheet inputs (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// MIME type of the generated workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Stateless Excel codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbook;

impl XlsxWorkbook {
    pub fn new() -> Self {
        Self
    }
}

/// Returns whether `filename` carries one of the [`ALLOWED_EXTENSIONS`].
pub fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
