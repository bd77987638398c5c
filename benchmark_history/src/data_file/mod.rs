//!
//! The dashboard data file.
//!

pub mod codec;
pub mod error;

use std::path::Path;
use std::path::PathBuf;

use crate::model::history::History;

use self::error::Error;

///
/// Reads a history from a dashboard data file.
///
pub fn read(path: &Path) -> Result<History, Error> {
    let script = std::fs::read_to_string(path).map_err(|error| Error::Reading {
        error,
        path: path.to_path_buf(),
    })?;
    codec::decode(script.as_str()).map_err(|error| Error::Decoding {
        error,
        path: path.to_path_buf(),
    })
}

///
/// Writes a history to a dashboard data file.
///
/// The script is written to a sibling temporary file first and then renamed
/// over the target, so readers never observe a partially written file.
///
pub fn write(path: &Path, history: &History) -> Result<(), Error> {
    let temporary_path = temporary_path(path);
    std::fs::write(temporary_path.as_path(), codec::encode(history)).map_err(|error| {
        Error::Writing {
            error,
            path: temporary_path.clone(),
        }
    })?;
    std::fs::rename(temporary_path.as_path(), path).map_err(|error| Error::Writing {
        error,
        path: path.to_path_buf(),
    })
}

///
/// Returns the temporary file path used while writing `path`.
///
fn temporary_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
