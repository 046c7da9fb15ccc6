//! Error types for loading, linking and writing NEO data.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type for neo_explorer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a load, link or write.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened, read or written
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A cell or record could not be coerced to its expected type
    #[error("Format error: {0}")]
    Format(String),

    /// An approach was linked twice, or to the wrong object
    #[error("Link error: {0}")]
    Link(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Classifies a csv error: I/O failures keep their source, everything
    /// else is a malformed input.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path: PathBuf = path.into();
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Error::io(path, source),
            _ => Error::Format(format!("{}: {}", path.display(), message)),
        }
    }

    pub(crate) fn from_json(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        let path: PathBuf = path.into();
        if err.is_io() {
            let source = io::Error::from(err);
            return Error::io(path, source);
        }
        Error::Format(format!("{}: {}", path.display(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = Error::io(
            "data/missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let text = err.to_string();
        assert!(text.contains("data/missing.csv"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn test_json_syntax_error_is_format() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(Error::from_json("cad.json", err), Error::Format(_)));
    }
}
