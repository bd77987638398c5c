//!
//! Benchmark run input.
//!

pub mod error;
pub mod format;
pub mod go_bench;

use std::path::PathBuf;

use crate::context::Context;
use crate::model::run::Run;

use self::error::Error;
use self::format::Format;
use self::go_bench::GoBenchOutput;

///
/// Benchmark run input: a file holding a new run in one of the supported formats.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The input file path.
    pub path: PathBuf,
    /// The input file format.
    pub format: Format,
}

impl Input {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, format: Format) -> Self {
        Self { path, format }
    }

    ///
    /// Reads the run.
    ///
    /// Run records are self-describing, while raw tool output takes the
    /// commit and tool information from the `context`.
    ///
    pub fn read(&self, context: Option<&Context>) -> Result<Run, Error> {
        let text = std::fs::read_to_string(self.path.as_path()).map_err(|error| {
            Error::Reading {
                error,
                path: self.path.clone(),
            }
        })?;
        if text.trim().is_empty() {
            return Err(Error::EmptyFile {
                path: self.path.clone(),
            });
        }

        match self.format {
            Format::Json => {
                serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
                    error,
                    path: self.path.clone(),
                })
            }
            Format::Go => {
                let context = context.ok_or_else(|| Error::MissingContext {
                    path: self.path.clone(),
                })?;
                let output = GoBenchOutput::parse(text.as_str());
                if output.is_empty() {
                    return Err(Error::NoBenchmarks {
                        path: self.path.clone(),
                    });
                }
                Ok(context.run(output.benches))
            }
        }
    }
}
