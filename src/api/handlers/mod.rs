//! HTTP request handlers for API endpoints.

pub mod health;
pub mod merge;

pub use health::health_handler;
pub use merge::merge_handler;
