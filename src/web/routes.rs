//! Upload form route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, upload_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Upload form
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}

/// Form submission routes.
///
/// # Endpoints
///
/// - `POST /upload` - Merge two exports and download the result
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload_handler))
}
