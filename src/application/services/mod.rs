//! Business logic services for the application layer.

pub mod batch_service;
pub mod merge_service;

pub use batch_service::{BatchReport, BatchService, OutputNaming};
pub use merge_service::{MergeOutcome, MergeService, UploadError, UploadedFile, merged_filename};
