//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`           - Upload form (public)
//! - `POST /upload`     - Form submission, returns the merged workbook
//! - `POST /api/merge`  - Programmatic merge, returns a JSON summary
//! - `GET  /health`     - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - `MAX_CONTENT_LENGTH` on the upload endpoints
//! - **Rate limiting** - Per-IP token bucket on the upload endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let uploads = Router::new()
        .merge(web::routes::upload_routes())
        .nest("/api", api::routes::upload_routes())
        .layer(DefaultBodyLimit::max(config.max_content_length))
        .layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        )?);

    let router = Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .merge(uploads)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
