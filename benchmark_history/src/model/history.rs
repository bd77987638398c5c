//!
//! The benchmark history.
//!

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::run::Run;

/// The tool label used by the dashboard when none is configured.
pub const DEFAULT_TOOL_LABEL: &str = "Benchmark";

///
/// The benchmark history: append-only run sequences keyed by tool label.
///
/// Labels and runs keep their insertion order, which is the order the
/// dashboard renders them in.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// Recording time of the most recently appended run in milliseconds since the Unix epoch.
    pub last_update: u64,
    /// URL of the benchmarked repository.
    pub repo_url: String,
    /// Run sequences keyed by tool label.
    pub entries: IndexMap<String, Vec<Run>>,
}

impl History {
    ///
    /// Creates an empty history for the repository.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: IndexMap::new(),
        }
    }

    ///
    /// Appends a run to the sequence of the tool label, creating the sequence if needed.
    ///
    /// The last update becomes the date of the appended run, even if an earlier
    /// run is dated later. Runs are neither validated nor deduplicated: recording
    /// the same commit twice yields two runs.
    ///
    pub fn append(&mut self, tool_label: &str, run: Run) {
        self.last_update = run.date;
        self.entries
            .entry(tool_label.to_owned())
            .or_default()
            .push(run);
    }

    ///
    /// Returns the runs recorded under the tool label, oldest first.
    ///
    pub fn runs(&self, tool_label: &str) -> &[Run] {
        self.entries
            .get(tool_label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    ///
    /// Returns the most recently appended run of the tool label.
    ///
    pub fn latest(&self, tool_label: &str) -> Option<&Run> {
        self.runs(tool_label).last()
    }

    ///
    /// Returns the run appended right before the latest one.
    ///
    pub fn previous(&self, tool_label: &str) -> Option<&Run> {
        let runs = self.runs(tool_label);
        runs.len().checked_sub(2).map(|index| &runs[index])
    }

    ///
    /// Returns the tool labels in insertion order.
    ///
    pub fn tool_labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    ///
    /// Returns the total number of runs across all tool labels.
    ///
    pub fn run_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
