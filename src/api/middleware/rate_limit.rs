//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter for the upload endpoints.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens refilled per second
/// - **Burst**: `burst_size` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with connect info.
///
/// # Errors
///
/// Returns an error if either setting is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/upload", post(upload_handler))
///     .layer(rate_limit::layer(2, 20)?);
/// ```
pub fn layer(
    per_second: u64,
    burst_size: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst_size)
        .finish()
        .context("Invalid rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
