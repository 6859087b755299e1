//! HTML template rendering handlers for the upload form.

mod index;
mod upload;

pub use index::{IndexTemplate, index_handler};
pub use upload::upload_handler;
