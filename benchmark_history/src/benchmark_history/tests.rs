//!
//! Tests for the benchmark history.
//!

#![cfg(test)]

use std::path::PathBuf;

fn test_data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(file_name)
}

#[test]
fn round_trip_is_byte_identical() {
    let path = test_data_path("data.js");
    let original = std::fs::read_to_string(path.as_path()).expect("Failed to read the data file");

    let history = benchmark_history::data_file::read(path.as_path())
        .expect("Failed to decode the data file");
    assert_eq!(history.repo_url, "https://github.com/codeboten/opentelemetry-collector");
    assert_eq!(history.last_update, 1687448562847);

    let runs = history.runs(benchmark_history::DEFAULT_TOOL_LABEL);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].tool, "go");
    assert_eq!(runs[0].commit.distinct, Some(true));
    assert_eq!(
        runs[0].commit.tree_id.as_deref(),
        Some("ccd2dc7f18672d7f5648c7fa790a3cf8874b9fcf")
    );

    let encoded = benchmark_history::data_file::codec::encode(&history);
    assert_eq!(encoded, original);
}

#[test]
fn duplicate_names_are_preserved() {
    let history = benchmark_history::data_file::read(test_data_path("data.js").as_path())
        .expect("Failed to decode the data file");
    let run = history
        .latest(benchmark_history::DEFAULT_TOOL_LABEL)
        .expect("The run exists");

    let unmarshal: Vec<&benchmark_history::Measurement> = run
        .benches
        .iter()
        .filter(|measurement| measurement.name == "BenchmarkJSONUnmarshal")
        .collect();
    assert_eq!(unmarshal.len(), 2);
    assert_eq!(unmarshal[1].value, 8478.0);
    assert_eq!(
        unmarshal[1].secondary_metric(benchmark_history::Measurement::UNIT_BYTES_PER_OP),
        Some(4392.0)
    );
    assert_eq!(unmarshal[1].iterations(), Some(146142));
    assert_eq!(unmarshal[1].procs(), Some(2));
}

#[test]
fn append_to_data_file() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let data_path = directory.path().join("data.js");
    std::fs::copy(test_data_path("data.js"), data_path.as_path())
        .expect("Failed to copy the data file");

    let next = benchmark_history::data_file::read(test_data_path("data_next.js").as_path())
        .expect("Failed to decode the data file");
    let next_run = next
        .latest(benchmark_history::DEFAULT_TOOL_LABEL)
        .cloned()
        .expect("The run exists");

    let mut history = benchmark_history::data_file::read(data_path.as_path())
        .expect("Failed to decode the data file");
    let original_runs = history.runs(benchmark_history::DEFAULT_TOOL_LABEL).to_vec();
    history.append(benchmark_history::DEFAULT_TOOL_LABEL, next_run.clone());
    benchmark_history::data_file::write(data_path.as_path(), &history)
        .expect("Failed to write the data file");

    let history = benchmark_history::data_file::read(data_path.as_path())
        .expect("Failed to decode the data file");
    let runs = history.runs(benchmark_history::DEFAULT_TOOL_LABEL);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0], original_runs[0]);
    assert_eq!(runs[1], next_run);
    assert_eq!(history.last_update, next_run.date);
    assert_eq!(
        history.last_update,
        runs.iter().map(|run| run.date).max().expect("Runs exist")
    );
}

#[test]
fn compare_consecutive_runs() {
    let mut history = benchmark_history::data_file::read(test_data_path("data.js").as_path())
        .expect("Failed to decode the data file");
    let next = benchmark_history::data_file::read(test_data_path("data_next.js").as_path())
        .expect("Failed to decode the data file");
    for run in next.runs(benchmark_history::DEFAULT_TOOL_LABEL).iter().cloned() {
        history.append(benchmark_history::DEFAULT_TOOL_LABEL, run);
    }

    let previous = history
        .previous(benchmark_history::DEFAULT_TOOL_LABEL)
        .expect("The run exists");
    let latest = history
        .latest(benchmark_history::DEFAULT_TOOL_LABEL)
        .expect("The run exists");
    let results = benchmark_history::compare(
        previous,
        latest,
        benchmark_history::DEFAULT_ALERT_THRESHOLD,
    );

    assert_eq!(
        results.negatives.len() + results.positives.len() + results.unchanged,
        latest.benches.len()
    );
    assert!(results.added.is_empty());
    assert!(results.removed.is_empty());
    assert!(!results.has_alerts());
}

#[test]
fn go_output_to_history() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let output_path = directory.path().join("output.txt");
    std::fs::write(
        output_path.as_path(),
        "goos: linux\nBenchmarkBoundedQueue-2   \t 2680562\t       452.7 ns/op\nBenchmarkTracesFromProto-2   \t   42799\t     27960 ns/op\t   30960 B/op\t     269 allocs/op\nPASS\n",
    )
    .expect("Failed to write the tool output");

    let context: benchmark_history::Context = serde_json::from_str(
        r#"{
            "repo_url": "https://github.com/codeboten/opentelemetry-collector",
            "date": 1687448558839,
            "commit": {
                "author": { "email": "aboten@lightstep.com", "name": "Alex Boten", "username": "codeboten" },
                "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
                "distinct": true,
                "id": "235f62537f02965fbed10d542f9f675a229907a4",
                "message": "Update perf.yml",
                "timestamp": "2023-06-22T08:38:37-07:00",
                "tree_id": "ccd2dc7f18672d7f5648c7fa790a3cf8874b9fcf",
                "url": "https://github.com/codeboten/opentelemetry-collector/commit/235f62537f02965fbed10d542f9f675a229907a4"
            }
        }"#,
    )
    .expect("Failed to parse the context");

    let run = benchmark_history::Input::new(output_path, benchmark_history::InputFormat::Go)
        .read(Some(&context))
        .expect("Failed to read the tool output");
    let mut history = benchmark_history::History::new(context.repo_url.clone());
    history.append(context.tool_label.as_str(), run);

    let script = benchmark_history::data_file::codec::encode(&history);
    assert!(script.starts_with("window.BENCHMARK_DATA = {\n  \"lastUpdate\": 1687448558839,"));
    assert!(script.contains(
        "          {\n            \"name\": \"BenchmarkBoundedQueue\",\n            \"value\": 452.7,\n            \"unit\": \"ns/op\",\n            \"extra\": \"2680562 times\\n2 procs\"\n          },"
    ));
    assert!(script.contains(
        "\"unit\": \"ns/op\\t   30960 B/op\\t     269 allocs/op\","
    ));
}

#[test]
fn export_formats() {
    let history = benchmark_history::data_file::read(test_data_path("data.js").as_path())
        .expect("Failed to decode the data file");
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");

    for format in [
        benchmark_history::OutputFormat::DataJs,
        benchmark_history::OutputFormat::Json,
        benchmark_history::OutputFormat::Csv,
        benchmark_history::OutputFormat::Xlsx,
    ] {
        let path = directory.path().join(format!("history.{format}"));
        let output: benchmark_history::Output = (&history, format)
            .try_into()
            .expect("Failed to convert the history");
        output
            .write_to_file(path.clone())
            .expect("Failed to write the output");
        assert!(path.exists());
    }

    let json = std::fs::read_to_string(directory.path().join("history.json"))
        .expect("Failed to read the output");
    let parsed: benchmark_history::History =
        serde_json::from_str(json.as_str()).expect("Failed to parse the output");
    assert_eq!(parsed, history);

    let csv = std::fs::read_to_string(directory.path().join("history.csv"))
        .expect("Failed to read the output");
    assert_eq!(
        csv.lines().count(),
        history
            .latest(benchmark_history::DEFAULT_TOOL_LABEL)
            .map(|run| run.benches.len())
            .unwrap_or_default()
            + 1
    );
}

#[test]
fn directory_input_expands_to_sorted_json_files() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    std::fs::create_dir(directory.path().join("sub")).expect("Failed to create a directory");
    for file_name in ["b.json", "a.json", "sub/c.json", "notes.txt"] {
        std::fs::write(directory.path().join(file_name), "[]").expect("Failed to write the file");
    }

    let paths = super::resolve_input_paths(
        vec![directory.path().to_path_buf()],
        benchmark_history::InputFormat::Json,
    )
    .expect("Failed to resolve the input paths");
    assert_eq!(
        paths,
        vec![
            directory.path().join("a.json"),
            directory.path().join("b.json"),
            directory.path().join("sub").join("c.json"),
        ]
    );
}

#[test]
fn file_inputs_are_kept_in_order() {
    let input_paths = vec![test_data_path("data_next.js"), test_data_path("data.js")];

    let paths = super::resolve_input_paths(
        input_paths.clone(),
        benchmark_history::InputFormat::Json,
    )
    .expect("Failed to resolve the input paths");
    assert_eq!(paths, input_paths);
}

#[test]
fn directory_input_rejected_for_go_output() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");

    let result = super::resolve_input_paths(
        vec![directory.path().to_path_buf()],
        benchmark_history::InputFormat::Go,
    );
    assert!(result.is_err());
}

#[test]
fn missing_data_file_starts_new_history() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let data_path = directory.path().join("data.js");

    let history = super::read_or_create(
        data_path.as_path(),
        Some("https://github.com/owner/repo".to_owned()),
        true,
    )
    .expect("Failed to start a new history");
    assert_eq!(history, benchmark_history::History::new("https://github.com/owner/repo".to_owned()));

    assert!(super::read_or_create(data_path.as_path(), None, true).is_err());
}

#[test]
fn empty_data_file_starts_new_history() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let data_path = directory.path().join("data.js");
    std::fs::write(data_path.as_path(), "\n").expect("Failed to write the data file");

    let history = super::read_or_create(
        data_path.as_path(),
        Some("https://github.com/owner/repo".to_owned()),
        true,
    )
    .expect("Failed to start a new history");
    assert_eq!(history.run_count(), 0);
    assert_eq!(history.repo_url, "https://github.com/owner/repo");

    assert!(super::read_or_create(data_path.as_path(), None, true).is_err());
}

#[test]
fn existing_data_file_is_read() {
    let history = super::read_or_create(test_data_path("data.js").as_path(), None, true)
        .expect("Failed to read the data file");
    assert_eq!(history.last_update, 1687448562847);
    assert_eq!(history.run_count(), 1);
}

#[test]
fn empty_input_files_are_skipped() {
    let next = benchmark_history::data_file::read(test_data_path("data_next.js").as_path())
        .expect("Failed to decode the data file");
    let next_run = next
        .latest(benchmark_history::DEFAULT_TOOL_LABEL)
        .cloned()
        .expect("The run exists");

    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let empty_path = directory.path().join("empty.json");
    let run_path = directory.path().join("run.json");
    std::fs::write(empty_path.as_path(), "  \n").expect("Failed to write the input");
    std::fs::write(
        run_path.as_path(),
        serde_json::to_string(&next_run).expect("Failed to serialize the run"),
    )
    .expect("Failed to write the input");

    let mut history = benchmark_history::data_file::read(test_data_path("data.js").as_path())
        .expect("Failed to decode the data file");
    let appended = super::append_inputs(
        &mut history,
        benchmark_history::DEFAULT_TOOL_LABEL,
        vec![empty_path, run_path],
        benchmark_history::InputFormat::Json,
        None,
        true,
        false,
    )
    .expect("Failed to append the inputs");

    assert_eq!(appended, 1);
    assert_eq!(history.run_count(), 2);
    assert_eq!(history.latest(benchmark_history::DEFAULT_TOOL_LABEL), Some(&next_run));
    assert_eq!(history.last_update, next_run.date);
}

#[test]
fn malformed_input_file_fails_append() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("broken.json");
    std::fs::write(path.as_path(), "{ \"commit\": ").expect("Failed to write the input");

    let mut history = benchmark_history::History::new("https://github.com/owner/repo".to_owned());
    let result = super::append_inputs(
        &mut history,
        benchmark_history::DEFAULT_TOOL_LABEL,
        vec![path],
        benchmark_history::InputFormat::Json,
        None,
        true,
        false,
    );
    assert!(result.is_err());
    assert_eq!(history.run_count(), 0);
}

#[test]
fn comparison_file_is_plain_text() {
    let mut history = benchmark_history::data_file::read(test_data_path("data.js").as_path())
        .expect("Failed to decode the data file");
    let next = benchmark_history::data_file::read(test_data_path("data_next.js").as_path())
        .expect("Failed to decode the data file");
    for run in next.runs(benchmark_history::DEFAULT_TOOL_LABEL).iter().cloned() {
        history.append(benchmark_history::DEFAULT_TOOL_LABEL, run);
    }
    let results = benchmark_history::compare(
        history
            .previous(benchmark_history::DEFAULT_TOOL_LABEL)
            .expect("The run exists"),
        history
            .latest(benchmark_history::DEFAULT_TOOL_LABEL)
            .expect("The run exists"),
        benchmark_history::DEFAULT_ALERT_THRESHOLD,
    );

    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("comparison.txt");
    colored::control::set_override(true);
    super::write_results_file(&results, path.as_path()).expect("Failed to write the comparison");
    colored::control::unset_override();

    let content = std::fs::read_to_string(path.as_path()).expect("Failed to read the comparison");
    assert!(content.contains("Change (-%)"));
    assert!(!content.contains('\u{1b}'));
}
