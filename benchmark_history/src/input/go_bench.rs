//!
//! The `go test -bench` output.
//!

use regex::Regex;

use crate::model::run::measurement::Measurement;

///
/// The `go test -bench` output.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GoBenchOutput {
    /// Benchmark results in the order they were printed.
    pub benches: Vec<Measurement>,
}

impl GoBenchOutput {
    /// Matches a result line, e.g. `BenchmarkBoundedQueue-2  2680562  452.7 ns/op`.
    /// The unit keeps everything after the value, including secondary metrics.
    const RESULT_LINE_PATTERN: &'static str = r"^(?P<name>Benchmark\S*?)(?P<procs>-\d+)?\s+(?P<iterations>\d+)\s+(?P<value>\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\s+(?P<unit>.+)$";

    ///
    /// Parses the tool output, skipping everything that is not a result line.
    ///
    pub fn parse(output: &str) -> Self {
        let regex = Regex::new(Self::RESULT_LINE_PATTERN).expect("Always valid");

        let benches = output
            .lines()
            .filter_map(|line| {
                let captures = regex.captures(line.trim_end())?;
                let value = captures["value"].parse::<f64>().ok()?;

                let mut extra = format!("{} times", &captures["iterations"]);
                if let Some(procs) = captures.name("procs") {
                    extra.push('\n');
                    extra.push_str(procs.as_str().trim_start_matches('-'));
                    extra.push_str(" procs");
                }

                Some(Measurement::new(
                    captures["name"].to_owned(),
                    value,
                    captures["unit"].to_owned(),
                    Some(extra),
                ))
            })
            .collect();

        Self { benches }
    }

    ///
    /// Whether the output contains no benchmark results.
    ///
    pub fn is_empty(&self) -> bool {
        self.benches.is_empty()
    }
}
