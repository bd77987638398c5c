//!
//! Serializing benchmark history to CSV.
//!

use std::fmt::Write;

use crate::model::history::History;
use crate::model::run::measurement::Measurement;

///
/// Serialize the history to CSV, one row per measurement, in the following format:
/// "tool_label", "commit", "date", "name", "value", "unit", "bytes_per_op", "allocs_per_op", "iterations", "procs"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The CSV header line.
    pub const HEADER: &'static str = r#""tool_label", "commit", "date", "name", "value", "unit", "bytes_per_op", "allocs_per_op", "iterations", "procs""#;

    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let number_fields = 7;
        let number_field_estimated_max_length = 15;
        let commit_id_length = 40;
        let name_estimated_max = 100;
        commit_id_length + name_estimated_max + number_fields * number_field_estimated_max_length
    }

    ///
    /// Quotes a text field, doubling the quotes inside.
    ///
    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    ///
    /// Formats an optional numeric field, leaving it empty if unset.
    ///
    fn optional<T>(value: Option<T>) -> String
    where
        T: std::fmt::Display,
    {
        value.map(|value| value.to_string()).unwrap_or_default()
    }
}

impl From<&History> for Csv {
    fn from(history: &History) -> Csv {
        let measurement_count: usize = history
            .entries
            .values()
            .flatten()
            .map(|run| run.benches.len())
            .sum();
        let mut content = String::with_capacity((measurement_count + 1) * Self::estimate_csv_line_length());
        content.push_str(Self::HEADER);
        content.push('\n');

        for (tool_label, runs) in history.entries.iter() {
            for run in runs.iter() {
                for measurement in run.benches.iter() {
                    writeln!(
                        &mut content,
                        "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}",
                        Self::quote(tool_label),
                        Self::quote(run.commit.id.as_str()),
                        run.date,
                        Self::quote(measurement.name.as_str()),
                        measurement.value,
                        Self::quote(measurement.primary_unit()),
                        Self::optional(measurement.secondary_metric(Measurement::UNIT_BYTES_PER_OP)),
                        Self::optional(measurement.secondary_metric(Measurement::UNIT_ALLOCS_PER_OP)),
                        Self::optional(measurement.iterations()),
                        Self::optional(measurement.procs()),
                    )
                    .expect("Always valid");
                }
            }
        }

        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::history::History;
    use crate::model::run::commit::Commit;
    use crate::model::run::measurement::Measurement;
    use crate::model::run::Run;

    use super::Csv;

    #[test]
    fn rows() {
        let mut history = History::default();
        history.append(
            "Benchmark",
            Run::new(
                Commit {
                    id: "e77ea62".to_owned(),
                    ..Default::default()
                },
                1687449416443,
                "go".to_owned(),
                vec![
                    Measurement::new(
                        "BenchmarkTracesFromProto".to_owned(),
                        27960.0,
                        "ns/op\t   30960 B/op\t     269 allocs/op".to_owned(),
                        Some("42799 times\n2 procs".to_owned()),
                    ),
                    Measurement::new(
                        "BenchmarkHttpRequest/HTTP/1.1,_\"quoted\"".to_owned(),
                        36871.0,
                        "ns/op".to_owned(),
                        None,
                    ),
                ],
            ),
        );

        let csv = Csv::from(&history);
        let lines: Vec<&str> = csv.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Csv::HEADER);
        assert_eq!(
            lines[1],
            r#""Benchmark", "e77ea62", 1687449416443, "BenchmarkTracesFromProto", 27960, "ns/op", 30960, 269, 42799, 2"#
        );
        assert_eq!(
            lines[2],
            r#""Benchmark", "e77ea62", 1687449416443, "BenchmarkHttpRequest/HTTP/1.1,_""quoted""", 36871, "ns/op", , , , "#
        );
    }
}
