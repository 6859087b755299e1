//! Multipart upload helpers shared by the API and the web form.

use axum::extract::Multipart;
use serde_json::json;

use crate::application::services::UploadedFile;
use crate::error::AppError;

/// Form field carrying the uploaded exports.
pub const FILES_FIELD: &str = "files";

/// Collects every `files` part of the request; other fields are ignored.
///
/// # Errors
///
/// Returns [`AppError`] if the body is malformed or exceeds the size limit.
pub async fn collect_files(mut multipart: Multipart) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        tracing::debug!(filename = %filename, size = data.len(), "Received upload");
        files.push(UploadedFile::new(filename, data.to_vec()));
    }

    Ok(files)
}

/// Runs workbook decoding/encoding off the async executor.
pub async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!(error = %e, "Merge task panicked or was cancelled");
        AppError::internal("Merge task failed", json!({}))
    })?
}
