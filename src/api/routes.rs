//! API route configuration.

use crate::api::handlers::merge_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Upload-driven API routes.
///
/// # Endpoints
///
/// - `POST /merge` - Merge two exports and return a JSON summary
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/merge", post(merge_handler))
}
