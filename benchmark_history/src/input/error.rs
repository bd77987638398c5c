//!
//! Benchmark run input error.
//!

use std::path::PathBuf;

///
/// Benchmark run input error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
    /// The tool output contains no benchmark results.
    #[error("Input file {path:?} contains no benchmark results")]
    NoBenchmarks {
        /// The path to the input file.
        path: PathBuf,
    },
    /// Raw tool output was provided without a context describing the run.
    #[error("Input file {path:?} requires a benchmark context to describe the run")]
    MissingContext {
        /// The path to the input file.
        path: PathBuf,
    },
}
