//! Directory listings captured for miss reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What was on disk at one candidate's parent directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    pub directory: PathBuf,
    pub state: ListingState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ListingState {
    /// Entry names, sorted.
    Entries(Vec<String>),
    Missing,
    Unreadable(String),
}

impl DirectoryListing {
    /// Snapshot the immediate entries of `dir`.
    pub fn capture(dir: &Path) -> Self {
        let state = match read_entries(dir) {
            Ok(entries) => ListingState::Entries(entries),
            Err(e) if e.kind() == io::ErrorKind::NotFound => ListingState::Missing,
            Err(e) => ListingState::Unreadable(e.to_string()),
        };
        Self {
            directory: dir.to_path_buf(),
            state,
        }
    }
}

fn read_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Capture each distinct parent of `paths`, in first-seen order.
pub fn capture_parents<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Vec<DirectoryListing> {
    let mut seen: Vec<&Path> = Vec::new();
    let mut listings = Vec::new();

    for path in paths {
        let Some(parent) = path.parent() else {
            continue;
        };
        if seen.contains(&parent) {
            continue;
        }
        seen.push(parent);
        listings.push(DirectoryListing::capture(parent));
    }

    listings
}
