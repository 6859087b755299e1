//! Handler for the programmatic merge endpoint.

use axum::{Json, extract::Multipart, extract::State};

use crate::api::dto::merge::MergeSummaryResponse;
use crate::api::upload::{collect_files, run_blocking};
use crate::error::AppError;
use crate::state::AppState;

/// Merges two uploaded exports and returns a JSON summary.
///
/// # Endpoint
///
/// `POST /api/merge`
///
/// # Request
///
/// `multipart/form-data` with exactly two `files` parts: a
/// `{site}-backlinks.xlsx` and a `{site}-backlinks_refdomains.xlsx` export.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "records_count": 2,
///   "domain": "example.com",
///   "columns": ["Domain ascore", "Domain", "Source title", "Source url"],
///   "sample_data": [
///     { "Domain ascore": 90, "Domain": "b.com", "Source title": "T2", "Source url": "http://b.com" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - **400** - wrong file count, bad extension, unrecognised or mismatched filenames
/// - **413** - request body over `MAX_CONTENT_LENGTH`
/// - **422** - missing required column or unreadable workbook
/// - **500** - internal failure
pub async fn merge_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MergeSummaryResponse>, AppError> {
    let files = collect_files(multipart).await?;
    let service = state.merge_service.clone();

    let outcome = run_blocking(move || service.merge_uploads(files).map_err(AppError::from)).await?;

    Ok(Json(MergeSummaryResponse::from(&outcome)))
}
