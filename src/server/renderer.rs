//! Page rendering: resolve a page, then either embed it or explain why not.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::pages::PageName;
use crate::resolver::{
    AssetError, AssetResolver, DirectoryListing, FailureKind, ListingState, MissReport, Resolution,
};

/// What the viewer shows.
///
/// `Idle` until a page is chosen; each selection produces a fresh
/// `Rendered` view that fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Rendered(RenderedPage),
}

impl ViewState {
    pub fn current_page(&self) -> Option<PageName> {
        match self {
            ViewState::Idle => None,
            ViewState::Rendered(page) => Some(page.page()),
        }
    }
}

/// Result of rendering one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPage {
    Embedded {
        page: PageName,
        source: PathBuf,
        content: String,
    },
    Diagnostic(DiagnosticReport),
}

impl RenderedPage {
    pub fn page(&self) -> PageName {
        match self {
            RenderedPage::Embedded { page, .. } => *page,
            RenderedPage::Diagnostic(report) => report.page,
        }
    }
}

/// Operator-facing explanation of a failed resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub page: PageName,
    pub kind: FailureKind,
    pub message: String,
    pub tried_paths: Vec<PathBuf>,
    pub working_dir: PathBuf,
    pub directory_listings: Vec<DirectoryListing>,
}

impl DiagnosticReport {
    fn from_miss(report: MissReport, working_dir: PathBuf) -> Self {
        Self {
            page: report.page,
            kind: FailureKind::AssetNotFound,
            message: format!(
                "No asset for page '{}' at any of {} candidate paths",
                report.page,
                report.tried_paths.len()
            ),
            tried_paths: report.tried_paths,
            working_dir,
            directory_listings: report.directory_listings,
        }
    }

    fn from_error(
        page: PageName,
        err: &AssetError,
        candidates: Vec<PathBuf>,
        working_dir: PathBuf,
    ) -> Self {
        // Candidates after the failing one were never consulted.
        let tried_paths: Vec<PathBuf> = match candidates.iter().position(|p| p == err.path()) {
            Some(idx) => candidates[..=idx].to_vec(),
            None => candidates,
        };

        Self {
            page,
            kind: err.kind(),
            message: err.to_string(),
            tried_paths,
            working_dir,
            directory_listings: Vec::new(),
        }
    }

    /// Plain-text rendition for terminals and text responses.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", self.kind.label(), self.message);
        let _ = writeln!(out, "Page: {}", self.page);
        let _ = writeln!(out, "Working directory: {}", self.working_dir.display());
        let _ = writeln!(out, "Tried paths:");
        for path in &self.tried_paths {
            let _ = writeln!(out, "  - {}", path.display());
        }
        if !self.directory_listings.is_empty() {
            let _ = writeln!(out, "Directory contents:");
            for listing in &self.directory_listings {
                let _ = writeln!(
                    out,
                    "  {}: {}",
                    listing.directory.display(),
                    describe_listing(&listing.state)
                );
            }
        }
        out
    }
}

/// One-line summary of a directory listing.
pub fn describe_listing(state: &ListingState) -> String {
    match state {
        ListingState::Entries(entries) if entries.is_empty() => "(empty)".to_string(),
        ListingState::Entries(entries) => entries.join(", "),
        ListingState::Missing => "does not exist".to_string(),
        ListingState::Unreadable(reason) => format!("unreadable ({})", reason),
    }
}

/// Turns navigation choices into rendered pages.
pub struct PageRenderer<'a> {
    resolver: &'a AssetResolver,
}

impl<'a> PageRenderer<'a> {
    pub fn new(resolver: &'a AssetResolver) -> Self {
        Self { resolver }
    }

    /// Resolve and render one page. Never fails: every resolution failure
    /// becomes a diagnostic view.
    pub fn render(&self, page: PageName) -> RenderedPage {
        let working_dir = self.resolver.anchors().working_dir.clone();

        match self.resolver.resolve(page) {
            Ok(Resolution::Found(asset)) => RenderedPage::Embedded {
                page,
                source: asset.path,
                content: asset.content,
            },
            Ok(Resolution::NotFound(report)) => {
                RenderedPage::Diagnostic(DiagnosticReport::from_miss(report, working_dir))
            }
            Err(e) => {
                tracing::error!("Failed to load page {}: {}", page, e);
                RenderedPage::Diagnostic(DiagnosticReport::from_error(
                    page,
                    &e,
                    self.resolver.candidates(page),
                    working_dir,
                ))
            }
        }
    }

    /// Apply a navigation selection to the view.
    pub fn navigate(&self, selection: Option<PageName>) -> ViewState {
        match selection {
            Some(page) => ViewState::Rendered(self.render(page)),
            None => ViewState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Anchors;
    use std::fs;

    fn resolver_in(dir: &std::path::Path) -> AssetResolver {
        let app = dir.join("app");
        fs::create_dir_all(&app).unwrap();
        AssetResolver::new(Anchors::from_app_dir(app, dir.join("cwd")))
    }

    #[test]
    fn test_navigate_without_selection_is_idle() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver_in(dir.path());
        let view = PageRenderer::new(&resolver).navigate(None);
        assert_eq!(view, ViewState::Idle);
        assert_eq!(view.current_page(), None);
    }

    #[test]
    fn test_render_found_embeds_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver_in(dir.path());
        let path = dir.path().join("app/static/celestial_simulation.html");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<script>orbit()</script>").unwrap();

        let view = PageRenderer::new(&resolver).navigate(Some(PageName::Celestial));
        assert_eq!(view.current_page(), Some(PageName::Celestial));
        assert_eq!(
            view,
            ViewState::Rendered(RenderedPage::Embedded {
                page: PageName::Celestial,
                source: path,
                content: "<script>orbit()</script>".to_string(),
            })
        );
    }

    #[test]
    fn test_render_miss_is_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver_in(dir.path());

        let RenderedPage::Diagnostic(report) = PageRenderer::new(&resolver).render(PageName::Physics)
        else {
            panic!("expected diagnostic");
        };
        assert_eq!(report.kind, FailureKind::AssetNotFound);
        assert_eq!(report.tried_paths, resolver.candidates(PageName::Physics));
        assert_eq!(report.working_dir, dir.path().join("cwd"));
        assert!(!report.directory_listings.is_empty());

        let text = report.to_text();
        assert!(text.starts_with("Asset not found:"));
        assert!(text.contains("Page: physics"));
        assert!(text.contains("does not exist"));
    }

    #[test]
    fn test_render_decode_error_is_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver_in(dir.path());
        let path = dir.path().join("physics_simulation.html");
        fs::write(&path, [0xc3, 0x28]).unwrap();

        let RenderedPage::Diagnostic(report) = PageRenderer::new(&resolver).render(PageName::Physics)
        else {
            panic!("expected diagnostic");
        };
        assert_eq!(report.kind, FailureKind::DecodeError);
        assert_eq!(report.tried_paths.last(), Some(&path));
        assert_eq!(report.tried_paths.len(), 2);
        assert!(report.directory_listings.is_empty());
    }

    #[test]
    fn test_describe_listing() {
        assert_eq!(describe_listing(&ListingState::Missing), "does not exist");
        assert_eq!(describe_listing(&ListingState::Entries(vec![])), "(empty)");
        assert_eq!(
            describe_listing(&ListingState::Entries(vec!["a".into(), "b".into()])),
            "a, b"
        );
    }
}
