//! Upload form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the upload form.
///
/// Renders `templates/index.html` with:
/// - A two-file upload form posting to `/upload`
/// - The configured size limit
/// - The last error, when re-rendered after a rejected upload
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
    pub max_upload_mb: usize,
}

impl IndexTemplate {
    pub fn new(max_content_length: usize, error: Option<String>) -> Self {
        Self {
            error,
            max_upload_mb: max_content_length / (1024 * 1024),
        }
    }
}

/// Renders the upload form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate::new(state.max_content_length, None)
}
