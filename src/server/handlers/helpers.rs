//! Shared helpers for handlers.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::renderer::{PageRenderer, RenderedPage, ViewState};
use super::super::template_structs::ErrorTemplate;
use super::super::AppState;
use crate::pages::PageName;

/// Parse a page name from the request, or build the 404 page.
pub fn parse_page(name: &str) -> Result<PageName, Response> {
    name.parse::<PageName>().map_err(|e| {
        tracing::debug!("Rejected page name {:?}", name);
        let message = e.to_string();
        let template = ErrorTemplate::new("Page not found", &message);
        let body = template.render().unwrap_or(message.clone());
        (StatusCode::NOT_FOUND, Html(body)).into_response()
    })
}

/// Resolve and render off the async runtime; the resolver does blocking
/// filesystem reads.
pub async fn render_page(state: &AppState, page: PageName) -> Result<RenderedPage, Response> {
    let resolver = state.resolver.clone();
    tokio::task::spawn_blocking(move || PageRenderer::new(&resolver).render(page))
        .await
        .map_err(|e| {
            tracing::error!("Render task for {} failed: {}", page, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render task failed").into_response()
        })
}

/// Apply a navigation selection.
pub async fn render_view(
    state: &AppState,
    selection: Option<PageName>,
) -> Result<ViewState, Response> {
    match selection {
        Some(page) => render_page(state, page).await.map(ViewState::Rendered),
        None => Ok(ViewState::Idle),
    }
}
