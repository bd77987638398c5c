//!
//! The benchmark history binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();
    let quiet = arguments.quiet;
    let verbose = arguments.verbose && !quiet;

    match arguments.command {
        Command::Append {
            data,
            input_paths,
            input_format,
            context,
            tool_label,
            repo_url,
        } => {
            let context = context
                .as_deref()
                .map(benchmark_history::Context::try_from_path)
                .transpose()?;
            let tool_label = tool_label
                .or_else(|| context.as_ref().map(|context| context.tool_label.clone()))
                .unwrap_or_else(|| benchmark_history::DEFAULT_TOOL_LABEL.to_owned());
            let repo_url =
                repo_url.or_else(|| context.as_ref().map(|context| context.repo_url.clone()));

            let mut history = read_or_create(data.as_path(), repo_url, quiet)?;
            let input_paths = resolve_input_paths(input_paths, input_format)?;
            let appended = append_inputs(
                &mut history,
                tool_label.as_str(),
                input_paths,
                input_format,
                context.as_ref(),
                quiet,
                verbose,
            )?;

            benchmark_history::data_file::write(data.as_path(), &history)?;
            if !quiet {
                eprintln!(
                    "{} {appended} run(s) appended to `{tool_label}` in {data:?}",
                    "Finished:".bright_green()
                );
            }
        }
        Command::Compare {
            data,
            tool_label,
            alert_threshold,
            fail_on_alert,
            output_path,
            group_max,
        } => {
            let history = benchmark_history::data_file::read(data.as_path())?;
            let (previous, latest) = match (
                history.previous(tool_label.as_str()),
                history.latest(tool_label.as_str()),
            ) {
                (Some(previous), Some(latest)) => (previous, latest),
                _ => anyhow::bail!(
                    "Tool label `{tool_label}` in {data:?} has fewer than two runs to compare"
                ),
            };

            let mut results = benchmark_history::compare(previous, latest, alert_threshold);
            results.sort_worst();
            if verbose {
                results.print_top_results(group_max);
            }

            match output_path {
                Some(output_path) => write_results_file(&results, output_path.as_path())?,
                None => {
                    let mut stdout = std::io::stdout();
                    results.write_all(&mut stdout)?;
                    writeln!(stdout)?;
                }
            }

            if fail_on_alert && results.has_alerts() {
                anyhow::bail!(
                    "{} measurement(s) of `{tool_label}` got worse by at least {:.0}%",
                    results.regressions().count(),
                    alert_threshold * 100.0
                );
            }
        }
        Command::Export {
            data,
            output_format,
            output_path,
        } => {
            let history = benchmark_history::data_file::read(data.as_path())?;
            let output: benchmark_history::Output = (&history, output_format).try_into()?;
            output.write_to_file(output_path.clone())?;
            if !quiet {
                eprintln!(
                    "{} {} run(s) exported to {output_path:?} as {output_format}",
                    "Finished:".bright_green(),
                    history.run_count()
                );
            }
        }
        Command::Show { data } => {
            let history = benchmark_history::data_file::read(data.as_path())?;
            print_summary(&history, verbose);
        }
    }

    Ok(())
}

///
/// Reads the history, or starts a new one if the data file is missing or empty.
///
fn read_or_create(
    path: &Path,
    repo_url: Option<String>,
    quiet: bool,
) -> anyhow::Result<benchmark_history::History> {
    match benchmark_history::data_file::read(path) {
        Ok(history) => Ok(history),
        Err(error) if error.is_missing_or_empty() => {
            let repo_url = repo_url.ok_or_else(|| {
                anyhow::anyhow!(
                    "Data file {path:?} does not exist yet. Use `--repo-url` or `--context` to create it."
                )
            })?;
            if !quiet {
                eprintln!(
                    "{} Starting a new benchmark history in {path:?}",
                    "Note:".bright_cyan()
                );
            }
            Ok(benchmark_history::History::new(repo_url))
        }
        Err(error) => Err(error.into()),
    }
}

///
/// Appends the runs read from the inputs, skipping empty input files.
///
/// Returns the number of appended runs.
///
fn append_inputs(
    history: &mut benchmark_history::History,
    tool_label: &str,
    input_paths: Vec<PathBuf>,
    input_format: benchmark_history::InputFormat,
    context: Option<&benchmark_history::Context>,
    quiet: bool,
    verbose: bool,
) -> anyhow::Result<usize> {
    let mut appended = 0;
    for path in input_paths.into_iter() {
        let input = benchmark_history::Input::new(path, input_format);
        match input.read(context) {
            Ok(run) => {
                if verbose {
                    eprintln!("{} {run}", "Appending".bright_green());
                }
                history.append(tool_label, run);
                appended += 1;
            }
            Err(benchmark_history::InputError::EmptyFile { path }) => {
                if !quiet {
                    eprintln!(
                        "{} Input file {path:?} is empty and will be skipped.",
                        "Warning:".bright_yellow()
                    );
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }
    Ok(appended)
}

///
/// Writes the comparison results to a file as plain text.
///
fn write_results_file(
    results: &benchmark_history::Results<'_>,
    path: &Path,
) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)
        .map_err(|error| anyhow::anyhow!("Comparison file {path:?} creating: {error}"))?;
    colored::control::set_override(false);
    let result = results.write_all(&mut file);
    colored::control::unset_override();
    result
}

///
/// Expands a single input directory into the run records it contains.
///
fn resolve_input_paths(
    input_paths: Vec<PathBuf>,
    input_format: benchmark_history::InputFormat,
) -> anyhow::Result<Vec<PathBuf>> {
    if input_paths.len() != 1 || !input_paths[0].is_dir() {
        return Ok(input_paths);
    }
    if input_format != benchmark_history::InputFormat::Json {
        anyhow::bail!(
            "Expected a file with `{input_format}` output, but got a directory: {:?}",
            input_paths[0]
        );
    }

    let resolution_pattern = format!("{}/**/*.json", input_paths[0].to_string_lossy());
    let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
        .filter_map(Result::ok)
        .collect();
    paths.sort();
    Ok(paths)
}

///
/// Prints the tool labels with their run counts and latest runs.
///
fn print_summary(history: &benchmark_history::History, verbose: bool) {
    let last_update = i64::try_from(history.last_update)
        .ok()
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
        .map(|date| date.to_rfc3339())
        .unwrap_or_else(|| history.last_update.to_string());

    println!("{:>12} {}", "Repository".bright_white(), history.repo_url);
    println!("{:>12} {last_update}", "Updated".bright_white());
    for tool_label in history.tool_labels() {
        let runs = history.runs(tool_label);
        println!(
            "{:>12} {} run(s)",
            tool_label.bright_white(),
            runs.len()
        );
        if verbose {
            for run in runs.iter() {
                println!("{:>12} {run}", "");
            }
        } else if let Some(latest) = history.latest(tool_label) {
            println!("{:>12} {latest}", "latest");
        }
    }
}
