//! HTTP request handlers for the web server.

mod api;
mod helpers;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_page_resolution, api_pages};
pub use pages::{index, page_view};
pub use static_files::{serve_css, serve_raw};
