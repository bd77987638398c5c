//!
//! The benchmark history arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark history arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Prints every processed run.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The action to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark history actions.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Appends new runs to the dashboard data file, creating it if needed.
    Append {
        /// The dashboard data file.
        #[arg(long)]
        data: PathBuf,

        /// Input files with new runs.
        /// If a single directory is provided, all JSON files inside are appended in path order.
        #[arg(long = "input", required = true)]
        input_paths: Vec<PathBuf>,

        /// Input format: `json` (default) or `go`.
        #[arg(long, default_value_t = benchmark_history::InputFormat::Json)]
        input_format: benchmark_history::InputFormat,

        /// The benchmark context describing the run.
        /// Required for raw tool output.
        #[arg(long)]
        context: Option<PathBuf>,

        /// The tool label to append under.
        /// Overrides the context, and defaults to `Benchmark`.
        #[arg(long)]
        tool_label: Option<String>,

        /// The repository URL used if a new data file is created.
        /// Overrides the context.
        #[arg(long)]
        repo_url: Option<String>,
    },

    /// Compares the latest run of a tool label with the previous one.
    Compare {
        /// The dashboard data file.
        #[arg(long)]
        data: PathBuf,

        /// The tool label to compare runs of.
        #[arg(long, default_value = benchmark_history::DEFAULT_TOOL_LABEL)]
        tool_label: String,

        /// The ratio at which a worse measurement is reported, e.g. `2.0` for 200%.
        #[arg(long, default_value_t = benchmark_history::DEFAULT_ALERT_THRESHOLD)]
        alert_threshold: f64,

        /// Exits with an error if any measurement reaches the alert threshold.
        #[arg(long)]
        fail_on_alert: bool,

        /// The output file. If unset, the result is printed to `stdout`.
        #[arg(short, long = "output-file")]
        output_path: Option<PathBuf>,

        /// Maximum number of results displayed in the best and worst lists.
        #[arg(long, default_value_t = 20)]
        group_max: usize,
    },

    /// Exports the history to another format.
    Export {
        /// The dashboard data file.
        #[arg(long)]
        data: PathBuf,

        /// Output format: `data-js`, `json`, `csv`, or `xlsx`.
        #[arg(long, default_value_t = benchmark_history::OutputFormat::DataJs)]
        output_format: benchmark_history::OutputFormat,

        /// The output file.
        #[arg(long)]
        output_path: PathBuf,
    },

    /// Prints a summary of the history.
    Show {
        /// The dashboard data file.
        #[arg(long)]
        data: PathBuf,
    },
}
