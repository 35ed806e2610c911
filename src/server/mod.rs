//! Web server for the visualization viewer.
//!
//! Serves a page shell with a sidebar selector. Choosing a page resolves its
//! HTML asset and embeds it in a sandboxed frame; a failed resolution shows
//! a diagnostic report in the same place instead.

mod assets;
mod handlers;
mod renderer;
mod routes;
mod template_structs;

pub use renderer::{DiagnosticReport, PageRenderer, RenderedPage, ViewState};
pub use routes::create_router;
pub use template_structs::ViewerTemplate;

use std::sync::Arc;

use crate::config::Settings;
use crate::resolver::AssetResolver;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AssetResolver>,
    pub embed_height: u32,
}

impl AppState {
    pub fn new(resolver: AssetResolver, embed_height: u32) -> Self {
        Self {
            resolver: Arc::new(resolver),
            embed_height,
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let anchors = settings.anchors()?;
        Ok(Self::new(AssetResolver::new(anchors), settings.embed_height))
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::from_settings(settings)?;
    let app = create_router(state);

    let listener = bind_listener(host, port).await?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind a listener; host names are looked up, IP literals bind as-is.
async fn bind_listener(host: &str, port: u16) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port)).await
}
