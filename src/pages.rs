//! Static page table.
//!
//! Every visualization the viewer can show is listed here with the ordered
//! set of places its HTML asset may live. The table is read-only; the
//! resolver walks it front to back and the first existing file wins.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Logical identifier for one visualization, independent of file location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageName {
    Home,
    Celestial,
    Physics,
    Chemistry,
    Biology,
    Maths,
}

impl PageName {
    /// All known pages, in selector order.
    pub const ALL: [PageName; 6] = [
        PageName::Home,
        PageName::Celestial,
        PageName::Physics,
        PageName::Chemistry,
        PageName::Biology,
        PageName::Maths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::Home => "home",
            PageName::Celestial => "celestial",
            PageName::Physics => "physics",
            PageName::Chemistry => "chemistry",
            PageName::Biology => "biology",
            PageName::Maths => "maths",
        }
    }

    /// Table entry for this page.
    pub fn entry(&self) -> &'static PageEntry {
        PAGE_TABLE
            .iter()
            .find(|e| e.name == *self)
            .unwrap_or(&PAGE_TABLE[0])
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for PageName {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PageName::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Base directory a candidate path is joined onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Directory of the running entry point.
    AppDir,
    /// One level above the app directory unless configured otherwise.
    ProjectRoot,
    /// Process working directory.
    WorkingDir,
}

impl Anchor {
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::AppDir => "app dir",
            Anchor::ProjectRoot => "project root",
            Anchor::WorkingDir => "working dir",
        }
    }
}

/// One place a page's asset may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub anchor: Anchor,
    pub suffix: &'static str,
}

const fn at(anchor: Anchor, suffix: &'static str) -> Candidate {
    Candidate { anchor, suffix }
}

/// A page known to the viewer.
#[derive(Debug)]
pub struct PageEntry {
    pub name: PageName,
    pub title: &'static str,
    /// Tried in order; first existing file wins.
    pub candidates: &'static [Candidate],
}

/// The full page table, in selector order.
pub static PAGE_TABLE: &[PageEntry] = &[
    PageEntry {
        name: PageName::Home,
        title: "Welcome to Quantheo Labs",
        candidates: &[
            at(Anchor::AppDir, "static/index.html"),
            at(Anchor::ProjectRoot, "static/index.html"),
            at(Anchor::WorkingDir, "static/index.html"),
        ],
    },
    PageEntry {
        name: PageName::Celestial,
        title: "Celestial Simulation",
        candidates: &[
            at(Anchor::AppDir, "static/celestial_simulation.html"),
            at(Anchor::ProjectRoot, "static/celestial_simulation.html"),
            at(Anchor::ProjectRoot, "celestial_simulation.html"),
            at(Anchor::WorkingDir, "static/celestial_simulation.html"),
        ],
    },
    PageEntry {
        name: PageName::Physics,
        title: "Physics Simulation",
        candidates: &[
            at(Anchor::AppDir, "static/physics_simulation.html"),
            at(Anchor::ProjectRoot, "physics_simulation.html"),
            at(Anchor::WorkingDir, "static/physics_simulation.html"),
        ],
    },
    PageEntry {
        name: PageName::Chemistry,
        title: "Chemistry Simulation",
        candidates: &[
            at(Anchor::AppDir, "static/chemistry_simulation.html"),
            at(Anchor::ProjectRoot, "chemistry_simulation.html"),
            at(Anchor::WorkingDir, "static/chemistry_simulation.html"),
        ],
    },
    PageEntry {
        name: PageName::Biology,
        title: "Biology Simulation",
        candidates: &[
            at(Anchor::AppDir, "static/biology_simulation.html"),
            at(Anchor::ProjectRoot, "biology_simulation.html"),
            at(Anchor::WorkingDir, "static/biology_simulation.html"),
        ],
    },
    PageEntry {
        name: PageName::Maths,
        title: "Maths Visualization",
        candidates: &[
            at(Anchor::AppDir, "static/maths_visualization.html"),
            at(Anchor::ProjectRoot, "static/maths_visualization.html"),
            at(Anchor::ProjectRoot, "maths_visualization.html"),
            at(Anchor::WorkingDir, "static/maths_visualization.html"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_name_round_trip() {
        for page in PageName::ALL {
            assert_eq!(page.to_string().parse::<PageName>().unwrap(), page);
        }
    }

    #[test]
    fn test_page_name_parse_is_case_insensitive() {
        assert_eq!("Celestial".parse::<PageName>().unwrap(), PageName::Celestial);
        assert_eq!(" maths ".parse::<PageName>().unwrap(), PageName::Maths);
    }

    #[test]
    fn test_unknown_page_rejected() {
        let err = "astrology".parse::<PageName>().unwrap_err();
        assert_eq!(err, UnknownPage("astrology".to_string()));
        assert_eq!(err.to_string(), "Unknown page: astrology");
    }

    #[test]
    fn test_table_covers_every_page_once() {
        let names: HashSet<_> = PAGE_TABLE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), PAGE_TABLE.len());
        assert_eq!(PAGE_TABLE.len(), PageName::ALL.len());
        for page in PageName::ALL {
            assert_eq!(page.entry().name, page);
        }
    }

    #[test]
    fn test_every_entry_has_candidates() {
        for entry in PAGE_TABLE {
            assert!(!entry.candidates.is_empty(), "{} has no candidates", entry.name);
            assert!(!entry.title.is_empty());
        }
    }

    #[test]
    fn test_celestial_prefers_app_dir() {
        let first = PageName::Celestial.entry().candidates[0];
        assert_eq!(first.anchor, Anchor::AppDir);
        assert_eq!(first.suffix, "static/celestial_simulation.html");
    }
}
