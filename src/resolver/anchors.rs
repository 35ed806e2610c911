//! Base directories for candidate paths.

use std::io;
use std::path::{Path, PathBuf};

use crate::pages::Anchor;

/// Concrete directory for each anchoring strategy.
///
/// Computed once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    pub app_dir: PathBuf,
    pub project_root: PathBuf,
    pub working_dir: PathBuf,
}

impl Anchors {
    pub fn new(app_dir: PathBuf, project_root: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            app_dir,
            project_root,
            working_dir,
        }
    }

    /// Derive the project root as the parent of `app_dir`.
    ///
    /// A root-level app dir is its own project root.
    pub fn from_app_dir(app_dir: PathBuf, working_dir: PathBuf) -> Self {
        let project_root = app_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| app_dir.clone());
        Self::new(app_dir, project_root, working_dir)
    }

    /// Detect anchors for the running process.
    ///
    /// The app dir defaults to the directory holding the executable; the
    /// project root defaults to its parent.
    pub fn detect(
        app_dir: Option<PathBuf>,
        project_root: Option<PathBuf>,
    ) -> io::Result<Self> {
        let working_dir = std::env::current_dir()?;

        let app_dir = match app_dir {
            Some(dir) => absolutize(dir, &working_dir),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| working_dir.clone())
            }
        };

        let mut anchors = Self::from_app_dir(app_dir, working_dir);
        if let Some(root) = project_root {
            anchors.project_root = absolutize(root, &anchors.working_dir);
        }

        tracing::debug!(
            "Anchors: app_dir={} project_root={} working_dir={}",
            anchors.app_dir.display(),
            anchors.project_root.display(),
            anchors.working_dir.display()
        );

        Ok(anchors)
    }

    /// Directory for an anchoring strategy.
    pub fn dir(&self, anchor: Anchor) -> &Path {
        match anchor {
            Anchor::AppDir => &self.app_dir,
            Anchor::ProjectRoot => &self.project_root,
            Anchor::WorkingDir => &self.working_dir,
        }
    }
}

fn absolutize(path: PathBuf, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_is_parent_of_app_dir() {
        let anchors = Anchors::from_app_dir(PathBuf::from("/srv/labs/app"), PathBuf::from("/tmp"));
        assert_eq!(anchors.project_root, PathBuf::from("/srv/labs"));
        assert_eq!(anchors.dir(Anchor::AppDir), Path::new("/srv/labs/app"));
        assert_eq!(anchors.dir(Anchor::ProjectRoot), Path::new("/srv/labs"));
        assert_eq!(anchors.dir(Anchor::WorkingDir), Path::new("/tmp"));
    }

    #[test]
    fn test_root_app_dir_is_own_project_root() {
        let anchors = Anchors::from_app_dir(PathBuf::from("/"), PathBuf::from("/"));
        assert_eq!(anchors.project_root, PathBuf::from("/"));
    }

    #[test]
    fn test_detect_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        let root = dir.path().join("elsewhere");

        let anchors = Anchors::detect(Some(app.clone()), Some(root.clone())).unwrap();
        assert_eq!(anchors.app_dir, app);
        assert_eq!(anchors.project_root, root);
        assert_eq!(anchors.working_dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_detect_relative_app_dir_joins_cwd() {
        let anchors = Anchors::detect(Some(PathBuf::from("sub/app")), None).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(anchors.app_dir, cwd.join("sub/app"));
        assert_eq!(anchors.project_root, cwd.join("sub"));
    }
}
