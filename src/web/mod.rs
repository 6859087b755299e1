//! Web layer for browser-based uploads.
//!
//! Provides the HTML upload form and the download endpoint behind it.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and download handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
