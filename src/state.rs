//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MergeService;
use crate::infrastructure::spreadsheet::XlsxWorkbook;

/// Merge service backed by the Excel codec.
pub type XlsxMergeService = MergeService<XlsxWorkbook, XlsxWorkbook>;

#[derive(Clone)]
pub struct AppState {
    pub merge_service: Arc<XlsxMergeService>,
    /// Upload size limit, shown on the form.
    pub max_content_length: usize,
}

impl AppState {
    pub fn new(merge_service: Arc<XlsxMergeService>, max_content_length: usize) -> Self {
        Self {
            merge_service,
            max_content_length,
        }
    }

    /// State wired to the Excel codec.
    pub fn with_xlsx(max_content_length: usize) -> Self {
        let codec = Arc::new(XlsxWorkbook::new());
        Self::new(
            Arc::new(MergeService::new(codec.clone(), codec)),
            max_content_length,
        )
    }
}
