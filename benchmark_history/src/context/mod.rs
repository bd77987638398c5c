//!
//! A context for recording a benchmark run, passed by the CI job.
//!

use std::path::Path;

use crate::model::history::DEFAULT_TOOL_LABEL;
use crate::model::run::commit::Commit;
use crate::model::run::measurement::Measurement;
use crate::model::run::Run;

///
/// A context for recording a benchmark run, passed by the CI job.
///
/// Raw benchmark tool output carries measurements only, so the commit and
/// repository information comes from here.
///
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Context {
    /// URL of the benchmarked repository.
    pub repo_url: String,
    #[serde(default = "Context::default_tool_label")]
    /// The tool label the run is appended under.
    pub tool_label: String,
    #[serde(default = "Context::default_tool")]
    /// Name of the benchmark tool.
    pub tool: String,
    #[serde(default)]
    /// Recording time override in milliseconds since the Unix epoch.
    /// The current time is used if unset.
    pub date: Option<u64>,
    /// The benchmarked commit.
    pub commit: Commit,
}

impl Context {
    /// The benchmark tool assumed if the context does not name one.
    pub const DEFAULT_TOOL: &'static str = "go";

    ///
    /// Reads the context from a JSON file and validates its correctness.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    /// 3. Context validation failed.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Benchmark context file {path:?} reading: {error}"))?;
        let context: Self = serde_json::from_str(contents.as_str())
            .map_err(|error| anyhow::anyhow!("Benchmark context file {path:?} parsing: {error}"))?;
        context.validate()?;
        Ok(context)
    }

    ///
    /// Checks that the context is well-formed.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.repo_url.is_empty() {
            anyhow::bail!("The `repo_url` field in the benchmark context is empty")
        }
        if self.tool_label.is_empty() {
            anyhow::bail!("The `tool_label` field in the benchmark context is empty")
        }
        if self.commit.id.is_empty() {
            anyhow::bail!("The `commit.id` field in the benchmark context is empty")
        }
        Ok(())
    }

    ///
    /// Creates a run of the context commit with the given measurements.
    ///
    pub fn run(&self, benches: Vec<Measurement>) -> Run {
        let date = self.date.unwrap_or_else(|| {
            u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
        });
        Run::new(self.commit.clone(), date, self.tool.clone(), benches)
    }

    fn default_tool_label() -> String {
        DEFAULT_TOOL_LABEL.to_owned()
    }

    fn default_tool() -> String {
        Self::DEFAULT_TOOL.to_owned()
    }
}
