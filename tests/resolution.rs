//! Resolution behaviour across deployment layouts.
//!
//! Each test builds a throwaway tree that mimics one way the app gets
//! deployed and checks which asset, if any, the resolver picks up.

use std::fs;
use std::path::{Path, PathBuf};

use quantheo::pages::{PageName, PAGE_TABLE};
use quantheo::resolver::{Anchors, AssetResolver, FailureKind, ListingState, Resolution};
use quantheo::server::{PageRenderer, RenderedPage};

struct Layout {
    _dir: tempfile::TempDir,
    anchors: Anchors,
}

impl Layout {
    /// `<tmp>/repo/Quantheo_Labs` is the app dir, `<tmp>/repo` the project
    /// root, and `<tmp>/deploy` the working directory.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("repo").join("Quantheo_Labs");
        let working_dir = dir.path().join("deploy");
        fs::create_dir_all(&app_dir).unwrap();
        fs::create_dir_all(&working_dir).unwrap();
        Self {
            anchors: Anchors::from_app_dir(app_dir, working_dir),
            _dir: dir,
        }
    }

    fn resolver(&self) -> AssetResolver {
        AssetResolver::new(self.anchors.clone())
    }

    fn write(&self, base: &Path, rel: &str, content: &[u8]) -> PathBuf {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn every_page_resolves_from_each_of_its_candidates() {
    for entry in PAGE_TABLE {
        for (idx, candidate) in entry.candidates.iter().enumerate() {
            let layout = Layout::new();
            let body = format!("<html>{} #{}</html>", entry.name, idx);
            let path = layout.write(
                layout.anchors.dir(candidate.anchor),
                candidate.suffix,
                body.as_bytes(),
            );

            match layout.resolver().resolve(entry.name).unwrap() {
                Resolution::Found(asset) => {
                    assert_eq!(asset.path, path);
                    assert_eq!(asset.content, body);
                }
                Resolution::NotFound(_) => {
                    panic!("{} not found via candidate {}", entry.name, idx)
                }
            }
        }
    }
}

#[test]
fn run_from_repo_root_layout() {
    let layout = Layout::new();
    let root = layout.anchors.project_root.clone();
    layout.write(&root, "static/index.html", b"<h1>Quantheo</h1>");

    let Resolution::Found(asset) = layout.resolver().resolve(PageName::Home).unwrap() else {
        panic!("expected home to resolve from the project root");
    };
    assert_eq!(asset.path, root.join("static/index.html"));
}

#[test]
fn celestial_resolves_from_app_dir_when_root_copy_absent() {
    let layout = Layout::new();
    let app = layout.anchors.app_dir.clone();
    layout.write(&app, "static/celestial_simulation.html", b"<canvas></canvas>");

    assert!(!layout
        .anchors
        .project_root
        .join("celestial_simulation.html")
        .exists());

    let Resolution::Found(asset) = layout.resolver().resolve(PageName::Celestial).unwrap() else {
        panic!("expected Found");
    };
    assert_eq!(asset.path, app.join("static/celestial_simulation.html"));
    assert_eq!(asset.content, "<canvas></canvas>");
}

#[test]
fn miss_report_reflects_disk_contents() {
    let layout = Layout::new();
    let cwd = layout.anchors.working_dir.clone();
    layout.write(&cwd, "static/readme.txt", b"not a page");

    let Resolution::NotFound(report) = layout.resolver().resolve(PageName::Chemistry).unwrap()
    else {
        panic!("expected NotFound");
    };

    assert_eq!(report.tried_paths.len(), PageName::Chemistry.entry().candidates.len());
    assert_eq!(report.tried_paths, layout.resolver().candidates(PageName::Chemistry));

    let cwd_static = report
        .directory_listings
        .iter()
        .find(|l| l.directory == cwd.join("static"))
        .unwrap();
    assert_eq!(
        cwd_static.state,
        ListingState::Entries(vec!["readme.txt".to_string()])
    );

    let app_static = report
        .directory_listings
        .iter()
        .find(|l| l.directory == layout.anchors.app_dir.join("static"))
        .unwrap();
    assert_eq!(app_static.state, ListingState::Missing);
}

#[test]
fn invalid_utf8_never_yields_content() {
    let layout = Layout::new();
    let root = layout.anchors.project_root.clone();
    layout.write(&root, "chemistry_simulation.html", b"<p>\xe2\x28\xa1</p>");

    let err = layout.resolver().resolve(PageName::Chemistry).unwrap_err();
    assert_eq!(err.kind(), FailureKind::DecodeError);

    let RenderedPage::Diagnostic(report) =
        PageRenderer::new(&layout.resolver()).render(PageName::Chemistry)
    else {
        panic!("expected diagnostic");
    };
    assert_eq!(report.kind, FailureKind::DecodeError);
}

#[test]
fn repeated_resolution_is_stable() {
    let layout = Layout::new();
    let resolver = layout.resolver();

    for page in PageName::ALL {
        assert_eq!(resolver.resolve(page).unwrap(), resolver.resolve(page).unwrap());
    }

    layout.write(&layout.anchors.app_dir, "static/maths_visualization.html", b"x");
    assert_eq!(
        resolver.resolve(PageName::Maths).unwrap(),
        resolver.resolve(PageName::Maths).unwrap()
    );
}
