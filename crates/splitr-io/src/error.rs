use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open input file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to close file {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The file the failure concerns.
    pub fn path(&self) -> &Path {
        match self {
            Error::Open { path, .. }
            | Error::Read { path, .. }
            | Error::Create { path, .. }
            | Error::Write { path, .. }
            | Error::Close { path, .. } => path,
        }
    }

    /// Underlying OS error kind.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Error::Open { source, .. }
            | Error::Read { source, .. }
            | Error::Create { source, .. }
            | Error::Write { source, .. }
            | Error::Close { source, .. } => source.kind(),
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        use std::io::ErrorKind;
        match (self, self.kind()) {
            (Error::Open { .. }, ErrorKind::NotFound) => {
                vec!["Check that the input path exists".into()]
            }
            (_, ErrorKind::PermissionDenied) => {
                vec!["Check file and directory permissions".into()]
            }
            (Error::Create { .. }, _) | (Error::Write { .. }, _) | (Error::Close { .. }, _) => {
                vec![
                    "Verify disk space is available".into(),
                    "Shards written before the failure are left on disk".into(),
                ]
            }
            _ => vec![],
        }
    }
}
