//! Static file serving handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::assets;
use super::super::renderer::RenderedPage;
use super::super::AppState;
use super::helpers::{parse_page, render_page};
use crate::resolver::FailureKind;

/// Serve a page's resolved asset directly, outside the viewer shell.
pub async fn serve_raw(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let page = match parse_page(&name) {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match render_page(&state, page).await {
        Ok(RenderedPage::Embedded {
            source, content, ..
        }) => {
            let mime = mime_guess::from_path(&source)
                .first_or_octet_stream()
                .to_string();
            ([(header::CONTENT_TYPE, mime)], content).into_response()
        }
        Ok(RenderedPage::Diagnostic(report)) => (
            match report.kind {
                FailureKind::AssetNotFound => StatusCode::NOT_FOUND,
                FailureKind::DecodeError | FailureKind::UnexpectedIoError => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            report.to_text(),
        )
            .into_response(),
        Err(resp) => resp,
    }
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}
