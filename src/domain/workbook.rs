//! Workbook codec contracts.
//!
//! The merge core only sees [`Table`] values; decoding uploaded bytes and
//! encoding the result are provided by the infrastructure layer
//! (see [`crate::infrastructure::spreadsheet`]).

use crate::domain::entities::MergedTable;
use crate::domain::error::MergeError;
use crate::domain::table::Table;

/// Decodes a spreadsheet file into a table.
#[cfg_attr(test, mockall::automock)]
pub trait WorkbookReader: Send + Sync {
    /// Reads the first worksheet of `data`, using its first row as headers.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Merge`] if the bytes are not a readable workbook.
    fn read_table(&self, data: &[u8]) -> Result<Table, MergeError>;
}

/// Encodes a merge result as a spreadsheet file.
#[cfg_attr(test, mockall::automock)]
pub trait WorkbookWriter: Send + Sync {
    /// Renders `table` as workbook bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Merge`] if encoding fails.
    fn write_table(&self, table: &MergedTable) -> Result<Vec<u8>, MergeError>;
}
