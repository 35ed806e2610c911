//! JSON API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::renderer::RenderedPage;
use super::super::AppState;
use super::helpers::render_page;
use crate::pages::{PageName, PAGE_TABLE};

/// List the page table with resolved candidate paths.
pub async fn api_pages(State(state): State<AppState>) -> impl IntoResponse {
    let pages: Vec<_> = PAGE_TABLE
        .iter()
        .map(|entry| {
            serde_json::json!({
                "name": entry.name,
                "title": entry.title,
                "candidates": state.resolver.candidates(entry.name),
            })
        })
        .collect();
    Json(pages)
}

/// Resolution report for one page. Content is summarized by size.
pub async fn api_page_resolution(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let page = match name.parse::<PageName>() {
        Ok(page) => page,
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let rendered = match render_page(&state, page).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let body = match rendered {
        RenderedPage::Embedded {
            page,
            source,
            content,
        } => serde_json::json!({
            "page": page,
            "status": "found",
            "path": source,
            "bytes": content.len(),
        }),
        RenderedPage::Diagnostic(report) => serde_json::json!({
            "page": report.page,
            "status": report.kind,
            "report": report,
        }),
    };

    Json(body).into_response()
}
