//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for workbook decoding and encoding.
//!
//! # Modules
//!
//! - [`spreadsheet`] - Excel (`.xlsx`/`.xls`) reader and `.xlsx` writer

pub mod spreadsheet;
