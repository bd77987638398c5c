//!
//! Dashboard data file error.
//!

use std::path::PathBuf;

use crate::data_file::codec::Error as CodecError;

///
/// Dashboard data file error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the data file.
    #[error("Reading data file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error writing the data file.
    #[error("Writing data file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error decoding the data file.
    #[error("Decoding data file {path:?}: {error}")]
    Decoding {
        /// The underlying codec error.
        error: CodecError,
        /// The path to the data file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the data file does not exist yet or has no content, so a new
    /// history may be started in its place.
    ///
    pub fn is_missing_or_empty(&self) -> bool {
        match self {
            Self::Reading { error, .. } => error.kind() == std::io::ErrorKind::NotFound,
            Self::Decoding {
                error: CodecError::Empty,
                ..
            } => true,
            _ => false,
        }
    }
}
