//! Resolution failures.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use serde::Serialize;
use thiserror::Error;

/// A candidate existed but could not be turned into text.
///
/// "No candidate exists" is not an error; it is [`super::Resolution::NotFound`].
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset is not valid UTF-8: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AssetError {
    /// Path of the candidate that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            AssetError::Decode { path, .. } | AssetError::Io { path, .. } => path,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            AssetError::Decode { .. } => FailureKind::DecodeError,
            AssetError::Io { .. } => FailureKind::UnexpectedIoError,
        }
    }
}

/// User-visible failure category shown in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    AssetNotFound,
    DecodeError,
    UnexpectedIoError,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::AssetNotFound => "Asset not found",
            FailureKind::DecodeError => "Decode error",
            FailureKind::UnexpectedIoError => "Unexpected I/O error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_kind_and_message() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = AssetError::Decode {
            path: PathBuf::from("/srv/static/x.html"),
            source,
        };
        assert_eq!(err.kind(), FailureKind::DecodeError);
        assert_eq!(err.to_string(), "Asset is not valid UTF-8: /srv/static/x.html");
        assert_eq!(err.path(), &PathBuf::from("/srv/static/x.html"));
    }

    #[test]
    fn test_io_error_kind() {
        let err = AssetError::Io {
            path: PathBuf::from("/srv/static/x.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), FailureKind::UnexpectedIoError);
        assert!(err.to_string().contains("denied"));
    }
}
