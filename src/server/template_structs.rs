//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.

use askama::Template;

use super::renderer::{describe_listing, DiagnosticReport, RenderedPage, ViewState};
use crate::pages::{PageName, PAGE_TABLE};

/// One entry in the sidebar selector.
pub struct PageOption {
    pub name: &'static str,
    pub title: &'static str,
    pub selected: bool,
}

impl PageOption {
    pub fn all(current: Option<PageName>) -> Vec<Self> {
        PAGE_TABLE
            .iter()
            .map(|entry| PageOption {
                name: entry.name.as_str(),
                title: entry.title,
                selected: current == Some(entry.name),
            })
            .collect()
    }
}

/// Embedded visualization.
pub struct EmbedView {
    pub source: String,
    pub content: String,
    pub height: u32,
}

/// Row of the directory listing table.
pub struct ListingRow {
    pub directory: String,
    pub summary: String,
}

/// Diagnostic block shown in place of content.
pub struct DiagnosticView {
    pub page: String,
    pub kind: &'static str,
    pub message: String,
    pub tried_paths: Vec<String>,
    pub working_dir: String,
    pub listings: Vec<ListingRow>,
}

impl From<&DiagnosticReport> for DiagnosticView {
    fn from(report: &DiagnosticReport) -> Self {
        Self {
            page: report.page.to_string(),
            kind: report.kind.label(),
            message: report.message.clone(),
            tried_paths: report
                .tried_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            working_dir: report.working_dir.display().to_string(),
            listings: report
                .directory_listings
                .iter()
                .map(|l| ListingRow {
                    directory: l.directory.display().to_string(),
                    summary: describe_listing(&l.state),
                })
                .collect(),
        }
    }
}

/// The viewer shell: sidebar selector plus either the welcome text, an
/// embedded visualization, or a diagnostic block.
#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate<'a> {
    pub title: &'a str,
    pub options: Vec<PageOption>,
    pub embed: Option<EmbedView>,
    pub diagnostic: Option<DiagnosticView>,
}

impl ViewerTemplate<'static> {
    pub fn from_view(view: &ViewState, embed_height: u32) -> Self {
        let current = view.current_page();
        let title = current
            .map(|p| p.entry().title)
            .unwrap_or(PageName::Home.entry().title);

        let (embed, diagnostic) = match view {
            ViewState::Idle => (None, None),
            ViewState::Rendered(RenderedPage::Embedded {
                source, content, ..
            }) => (
                Some(EmbedView {
                    source: source.display().to_string(),
                    content: content.clone(),
                    height: embed_height,
                }),
                None,
            ),
            ViewState::Rendered(RenderedPage::Diagnostic(report)) => {
                (None, Some(DiagnosticView::from(report)))
            }
        };

        Self {
            title,
            options: PageOption::all(current),
            embed,
            diagnostic,
        }
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub options: Vec<PageOption>,
}

impl<'a> ErrorTemplate<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            options: PageOption::all(None),
        }
    }
}
