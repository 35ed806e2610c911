//! Viewer page handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::super::renderer::ViewState;
use super::super::template_structs::ViewerTemplate;
use super::super::AppState;
use super::helpers::{parse_page, render_view};

/// Query params for the selector form.
#[derive(Debug, Deserialize)]
pub struct SelectParams {
    pub page: Option<String>,
}

/// Viewer root. Idle without a selection, rendered with `?page=`.
pub async fn index(State(state): State<AppState>, Query(params): Query<SelectParams>) -> Response {
    let selection = match params.page.as_deref().filter(|p| !p.is_empty()) {
        Some(name) => match parse_page(name) {
            Ok(page) => Some(page),
            Err(resp) => return resp,
        },
        None => None,
    };

    match render_view(&state, selection).await {
        Ok(view) => viewer_html(&view, state.embed_height),
        Err(resp) => resp,
    }
}

/// Render a page by path.
pub async fn page_view(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let page = match parse_page(&name) {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match render_view(&state, Some(page)).await {
        Ok(view) => viewer_html(&view, state.embed_height),
        Err(resp) => resp,
    }
}

fn viewer_html(view: &ViewState, embed_height: u32) -> Response {
    let template = ViewerTemplate::from_view(view, embed_height);
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}
