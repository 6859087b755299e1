//! Domain layer: the pure merge core.
//!
//! Everything here operates on in-memory values and performs no I/O, so it
//! can be unit tested without a web server or files on disk.
//!
//! # Architecture
//!
//! - [`table`] - Tabular input as read from a workbook
//! - [`entities`] - Input and output row types
//! - [`normalizer`] - Domain extraction from backlink URLs
//! - [`file_pair`] - Filename roles and site-domain agreement
//! - [`merge`] - Join, sort and result assembly
//! - [`workbook`] - Reader/writer traits implemented by infrastructure
//! - [`error`] - Core error kinds
//!
//! # Merge Flow
//!
//! 1. [`file_pair::validate_pair`] checks that both filenames name the same site
//! 2. Both files are decoded into [`table::Table`] values by a [`workbook::WorkbookReader`]
//! 3. [`merge::merge_tables`] joins and ranks the rows
//! 4. A [`workbook::WorkbookWriter`] renders the [`entities::MergedTable`]

pub mod entities;
pub mod error;
pub mod file_pair;
pub mod merge;
pub mod normalizer;
pub mod table;
pub mod workbook;
