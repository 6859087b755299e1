//! DTOs for the merge endpoint.

use serde::Serialize;

use crate::application::services::MergeOutcome;
use crate::domain::entities::MergedRow;

/// Number of merged rows echoed back in [`MergeSummaryResponse::sample_data`].
pub const SAMPLE_ROWS: usize = 5;

/// Summary of a successful merge.
#[derive(Debug, Serialize)]
pub struct MergeSummaryResponse {
    pub success: bool,
    pub records_count: usize,
    pub domain: String,
    /// Output column names, in spreadsheet order.
    pub columns: Vec<&'static str>,
    /// First [`SAMPLE_ROWS`] rows, keyed by column name.
    pub sample_data: Vec<MergedRow>,
}

impl From<&MergeOutcome> for MergeSummaryResponse {
    fn from(outcome: &MergeOutcome) -> Self {
        Self {
            success: true,
            records_count: outcome.table.len(),
            domain: outcome.domain.clone(),
            columns: outcome.table.columns().to_vec(),
            sample_data: outcome.table.head(SAMPLE_ROWS).to_vec(),
        }
    }
}
