//!
//! A single benchmark execution.
//!

pub mod commit;
pub mod measurement;

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use self::commit::Commit;
use self::measurement::Measurement;

///
/// Identifies a measurement within a run: its name and the index of its
/// occurrence among measurements sharing that name.
///
pub type MeasurementKey<'a> = (&'a str, usize);

///
/// A single benchmark execution, recorded once per CI job and never modified.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The benchmarked commit.
    pub commit: Commit,
    /// Recording time in milliseconds since the Unix epoch.
    pub date: u64,
    /// Name of the benchmark tool, e.g. `go` or `cargo`.
    pub tool: String,
    /// Measurements in the order they were reported.
    pub benches: Vec<Measurement>,
}

impl Run {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: String, benches: Vec<Measurement>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// Returns the recording time, if it is representable.
    ///
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.date)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    ///
    /// Returns the measurements with their keys, preserving the reported order.
    ///
    pub fn keyed_benches(&self) -> Vec<(MeasurementKey<'_>, &Measurement)> {
        let mut occurrences: HashMap<&str, usize> = HashMap::with_capacity(self.benches.len());
        self.benches
            .iter()
            .map(|measurement| {
                let occurrence = occurrences.entry(measurement.name.as_str()).or_default();
                let key = (measurement.name.as_str(), *occurrence);
                *occurrence += 1;
                (key, measurement)
            })
            .collect()
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let date = self
            .datetime()
            .map(|date| date.to_rfc3339())
            .unwrap_or_else(|| self.date.to_string());
        write!(
            f,
            "{} {date} {}: {} benchmarks",
            self.commit.short_id(),
            self.tool,
            self.benches.len()
        )
    }
}
