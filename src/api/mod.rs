//! REST API layer for HTTP request/response handling.
//!
//! This layer translates multipart uploads into merge operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing middleware
//! - [`routes`] - Route configuration and composition
//! - [`upload`] - Multipart collection shared with the web form

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod upload;
