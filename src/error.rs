//! Error types for tree building and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run.
///
/// Permission denial while listing a directory is not an error here: it is
/// recorded on the affected node and traversal continues.
#[derive(Debug, Error)]
pub enum Error {
    /// The traversal root does not exist.
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// Listing or stat-ing an entry failed for a reason other than permission denial.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output document could not be persisted.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A saved structure document is not valid JSON of the expected shape.
    #[error("cannot parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound {
            path: PathBuf::from("missing/dir"),
        };
        assert_eq!(err.to_string(), "missing/dir does not exist");
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = Error::write("out.json", io::Error::other("disk full"));
        assert!(err.to_string().contains("out.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
