//! HTTP-facing error type.
//!
//! Core and service errors are mapped onto [`AppError`], which renders as
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::UploadError;
use crate::domain::error::MergeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    PayloadTooLarge { message: String, details: Value },
    Unprocessable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn payload_too_large(message: impl Into<String>, details: Value) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::PayloadTooLarge { message, .. }
            | AppError::Unprocessable { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::Validation { details, .. } => ("validation_error", details),
            AppError::PayloadTooLarge { details, .. } => ("payload_too_large", details),
            AppError::Unprocessable { details, .. } => ("unprocessable_file", details),
            AppError::Internal { details, .. } => ("internal_error", details),
        };

        ErrorInfo {
            code,
            message: self.message().to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<MergeError> for AppError {
    fn from(e: MergeError) -> Self {
        let message = e.to_string();
        match e {
            MergeError::DomainMismatch {
                backlinks,
                refdomains,
            } => AppError::bad_request(
                message,
                json!({ "backlinks_domain": backlinks, "refdomains_domain": refdomains }),
            ),
            MergeError::UnclassifiedFile(filename) => {
                AppError::bad_request(message, json!({ "filename": filename }))
            }
            MergeError::Schema {
                table,
                missing_column,
            } => AppError::unprocessable(
                message,
                json!({ "file": table.to_string(), "missing_column": missing_column }),
            ),
            MergeError::Merge(_) => AppError::unprocessable(message, json!({})),
        }
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        match e {
            UploadError::Merge(inner) => inner.into(),
            UploadError::WrongFileCount(count) => {
                AppError::bad_request(e.to_string(), json!({ "received": count }))
            }
            UploadError::UnsupportedExtension(ref filename) => {
                let details = json!({ "filename": filename, "allowed": ["xlsx", "xls"] });
                AppError::bad_request(e.to_string(), details)
            }
            other => AppError::bad_request(other.to_string(), json!({})),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        let status = e.status();
        let message = e.body_text();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large("Uploaded files exceed the size limit", json!({}))
        } else {
            AppError::bad_request(message, json!({}))
        }
    }
}
