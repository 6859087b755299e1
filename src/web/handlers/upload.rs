//! Form upload handler returning the merged workbook.

use axum::extract::{Multipart, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde_json::json;

use crate::api::upload::{collect_files, run_blocking};
use crate::application::services::merged_filename;
use crate::error::AppError;
use crate::infrastructure::spreadsheet::XLSX_CONTENT_TYPE;
use crate::state::AppState;
use crate::web::handlers::index::IndexTemplate;

/// Merges two uploaded exports and streams back the result as a download.
///
/// # Endpoint
///
/// `POST /upload`
///
/// # Response
///
/// On success, `{domain}-merged-{YYYYMMDD}.xlsx` as an attachment.
/// On failure, the upload form is rendered again with the error message and
/// the matching status code; no partial workbook is ever returned.
pub async fn upload_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    match merge_to_workbook(&state, multipart).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(status = %e.status(), error = %e.message(), "Upload rejected");
            let page = IndexTemplate::new(state.max_content_length, Some(e.message().to_string()));
            (e.status(), page).into_response()
        }
    }
}

async fn merge_to_workbook(state: &AppState, multipart: Multipart) -> Result<Response, AppError> {
    let files = collect_files(multipart).await?;
    let service = state.merge_service.clone();

    let (filename, bytes) = run_blocking(move || {
        let outcome = service.merge_uploads(files)?;
        let bytes = service.render(&outcome)?;
        let filename = merged_filename(&outcome.domain, Some(Local::now().date_naive()));
        Ok((filename, bytes))
    })
    .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        header_safe(&filename)
    ))
    .map_err(|_| AppError::internal("Invalid download filename", json!({ "filename": filename })))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Replaces characters that cannot appear in a quoted header parameter.
fn header_safe(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_safe() {
        assert_eq!(header_safe("foo-merged-20240101.xlsx"), "foo-merged-20240101.xlsx");
        assert_eq!(header_safe("a\"b\\c.xlsx"), "a_b_c.xlsx");
        assert_eq!(header_safe("münchen.de-merged.xlsx"), "m_nchen.de-merged.xlsx");
    }
}
