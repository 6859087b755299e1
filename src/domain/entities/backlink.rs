//! Row of a backlinks export.

use crate::domain::table::{Cell, Table};

/// Column holding the linking page URL.
pub const SOURCE_URL_COLUMN: &str = "Source url";
/// Column holding the linking page title.
pub const SOURCE_TITLE_COLUMN: &str = "Source title";

/// An inbound link from a source page to the analysed site.
#[derive(Debug, Clone, PartialEq)]
pub struct BacklinkRow {
    /// Raw URL as exported; `None` when the cell is empty or not text.
    pub source_url: Option<String>,
    pub source_title: String,
}

impl BacklinkRow {
    pub fn new(source_url: Option<String>, source_title: impl Into<String>) -> Self {
        Self {
            source_url,
            source_title: source_title.into(),
        }
    }

    /// Builds a row from the cells at the given column positions.
    pub fn from_cells(url: &Cell, title: &Cell) -> Self {
        Self {
            source_url: url.as_str().map(str::to_string),
            source_title: title.to_text().unwrap_or_default(),
        }
    }

    /// Reads all rows of `table` using the resolved column positions.
    pub fn collect(table: &Table, url_column: usize, title_column: usize) -> Vec<Self> {
        (0..table.len())
            .map(|i| Self::from_cells(table.cell(i, url_column), table.cell(i, title_column)))
            .collect()
    }
}
