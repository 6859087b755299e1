//! Application layer services implementing the merge workflows.
//!
//! This layer orchestrates the pure merge core with the workbook codec and
//! provides a clean API for the HTTP handlers and the batch binary.
//!
//! # Available Services
//!
//! - [`services::merge_service::MergeService`] - Upload pairing, validation, merge and rendering
//! - [`services::batch_service::BatchService`] - Directory scan and per-site output files

pub mod services;
