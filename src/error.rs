//! Build errors
//!
//! Conversion itself never fails; everything here happens at the I/O
//! boundary of a build pass.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the site
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Source directory not found: {0:?}")]
    SourceDirMissing(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    ReadPost {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {path:?}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl BuildError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
