//! # Backlink Merger
//!
//! Merges a "backlinks" export and a "referring domains" export of the same
//! site into a single workbook ranked by referring-domain authority score.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Pure merge core: domain normalization,
//!   filename pairing rules, join and sort
//! - **Application Layer** ([`application`]) - Upload pairing and batch orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Excel workbook reading and writing
//! - **API Layer** ([`api`]) - JSON merge endpoint, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML upload form and download
//!
//! ## Entry Points
//!
//! - `backlink-merger` - Web service with the upload form and `POST /api/merge`
//! - `batch` - One-shot merge of every export pair found in a directory
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the web service
//! cargo run
//!
//! # Merge a directory of exports
//! cargo run --bin batch -- --input-dir exports --output-dir merged
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BatchService, MergeService, UploadedFile};
    pub use crate::domain::entities::{MergedRow, MergedTable};
    pub use crate::domain::error::MergeError;
    pub use crate::domain::file_pair::{classify, extract_site_domain, validate_pair};
    pub use crate::domain::merge::merge_tables;
    pub use crate::domain::normalizer::normalize_domain;
    pub use crate::domain::table::{Cell, Table};
    pub use crate::error::AppError;
    pub use crate::infrastructure::spreadsheet::XlsxWorkbook;
    pub use crate::state::AppState;
}
