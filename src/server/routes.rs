//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/pages", get(handlers::api_pages))
        .route(
            "/api/pages/:name/resolution",
            get(handlers::api_page_resolution),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        // Viewer shell, idle or with ?page= selection
        .route("/", get(handlers::index))
        .route("/pages/:name", get(handlers::page_view))
        // Resolved asset without the shell
        .route("/raw/:name", get(handlers::serve_raw))
        .route("/static/style.css", get(handlers::serve_css))
        .merge(api)
        .with_state(state)
}
