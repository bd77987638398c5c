//!
//! XLSX output format for benchmark history.
//!

pub mod worksheet;

use std::collections::HashSet;

use crate::model::history::History;
use crate::model::run::Run;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark history.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheets in tool label order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    ///
    /// Returns the column caption for a run: the short commit hash and the recording date.
    ///
    pub fn run_caption(run: &Run) -> String {
        let date = run
            .datetime()
            .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| run.date.to_string());
        format!("{}\n{date}", run.commit.short_id())
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&History> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(history: &History) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();
        let mut used_names = HashSet::with_capacity(history.entries.len());

        for (tool_label, runs) in history.entries.iter() {
            let name = Worksheet::unique_name(tool_label, &used_names);
            used_names.insert(name.to_lowercase());
            let mut worksheet = Worksheet::new(name.as_str(), vec![("Benchmark", 80), ("Unit", 12)])?;

            for (run_index, run) in runs.iter().enumerate() {
                let run_index = run_index as u16;
                worksheet.add_run_column(Self::run_caption(run).as_str(), run_index)?;
                for ((name, occurrence), measurement) in run.keyed_benches().into_iter() {
                    let row_name = if occurrence == 0 {
                        name.to_owned()
                    } else {
                        format!("{name} #{}", occurrence + 1)
                    };
                    worksheet.write_value(
                        row_name.as_str(),
                        measurement.primary_unit(),
                        run_index,
                        measurement.value,
                    )?;
                }
            }

            if runs.len() >= 2 {
                let total_runs = runs.len() as u16;
                worksheet.set_diffs(total_runs - 2, total_runs - 1, total_runs)?;
            }

            xlsx.worksheets.push(worksheet);
        }

        Ok(xlsx)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::history::History;
    use crate::model::run::measurement::Measurement;
    use crate::model::run::Run;

    use super::Xlsx;

    #[test]
    fn clashing_tool_labels() {
        let mut history = History::new("https://github.com/owner/repo".to_owned());
        for (index, tool_label) in [
            "Collector benchmarks on ubuntu-latest",
            "Collector benchmarks on ubuntu-22.04",
            "go/bench",
            "go:bench",
        ]
        .into_iter()
        .enumerate()
        {
            history.append(
                tool_label,
                Run {
                    date: 1687448558839 + index as u64,
                    tool: "go".to_owned(),
                    benches: vec![Measurement::new(
                        "BenchmarkBoundedQueue".to_owned(),
                        452.7,
                        "ns/op".to_owned(),
                        None,
                    )],
                    ..Default::default()
                },
            );
        }

        let xlsx = Xlsx::try_from(&history).expect("Always valid");
        assert_eq!(xlsx.worksheets.len(), 4);

        let directory = tempfile::tempdir().expect("Always valid");
        xlsx.finalize()
            .save(directory.path().join("history.xlsx"))
            .expect("Always valid");
    }
}
