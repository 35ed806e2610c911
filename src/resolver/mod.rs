//! Asset resolution.
//!
//! Turns a logical page name into file content by trying each of the page's
//! candidate paths in table order. A miss is reported as data, including what
//! each candidate's parent directory actually contains, so an operator can
//! fix a deployment layout without shell access to the host.
//!
//! The resolver only reads. It never caches: every call goes back to disk.

mod anchors;
mod error;
mod listing;

pub use anchors::Anchors;
pub use error::{AssetError, FailureKind};
pub use listing::{DirectoryListing, ListingState};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::pages::{Candidate, PageName};

/// A resolved asset, loaded whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundAsset {
    pub path: PathBuf,
    pub content: String,
}

/// Everything learned while failing to find a page's asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissReport {
    pub page: PageName,
    /// One entry per configured candidate, in configured order.
    pub tried_paths: Vec<PathBuf>,
    /// Distinct candidate parents, in first-seen order.
    pub directory_listings: Vec<DirectoryListing>,
}

/// Outcome of a resolution attempt that did not hit an I/O fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(FoundAsset),
    NotFound(MissReport),
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Locates page assets relative to a fixed set of anchor directories.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    anchors: Anchors,
}

impl AssetResolver {
    pub fn new(anchors: Anchors) -> Self {
        Self { anchors }
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Absolute candidate paths for a page, in the order they are tried.
    pub fn candidates(&self, page: PageName) -> Vec<PathBuf> {
        page.entry()
            .candidates
            .iter()
            .map(|c| self.candidate_path(c))
            .collect()
    }

    fn candidate_path(&self, candidate: &Candidate) -> PathBuf {
        self.anchors.dir(candidate.anchor).join(candidate.suffix)
    }

    /// Resolve a page to its asset content.
    ///
    /// Returns `Found` for the first candidate that is an existing file and
    /// decodes as UTF-8. Returns `NotFound` when no candidate exists. A file
    /// that exists but cannot be read or decoded is an error; later
    /// candidates are not consulted.
    pub fn resolve(&self, page: PageName) -> Result<Resolution, AssetError> {
        let tried_paths = self.candidates(page);

        for path in &tried_paths {
            tracing::debug!("Trying {} for page {}", path.display(), page);

            if !self.is_present(path)? {
                continue;
            }

            let content = read_text(path)?;
            tracing::info!(
                "Resolved page {} to {} ({} bytes)",
                page,
                path.display(),
                content.len()
            );
            return Ok(Resolution::Found(FoundAsset {
                path: path.clone(),
                content,
            }));
        }

        tracing::warn!(
            "No asset found for page {} after {} candidates",
            page,
            tried_paths.len()
        );

        let directory_listings = listing::capture_parents(&tried_paths);
        Ok(Resolution::NotFound(MissReport {
            page,
            tried_paths,
            directory_listings,
        }))
    }

    /// Whether `path` names an existing regular file.
    ///
    /// Permission faults surface as errors; anything else that prevents a
    /// stat counts as absent.
    fn is_present(&self, path: &Path) -> Result<bool, AssetError> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Err(AssetError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
            Err(e) => {
                tracing::debug!("Skipping {}: {}", path.display(), e);
                Ok(false)
            }
        }
    }
}

fn read_text(path: &Path) -> Result<String, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
