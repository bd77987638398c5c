//!
//! A single named benchmark result.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single named benchmark result.
///
/// Names are not unique within a run: parameterized sub-benchmarks may report
/// the same name several times, and every occurrence is kept.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Benchmark name.
    pub name: String,
    #[serde(serialize_with = "serialize_value")]
    /// The primary measured value.
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Variance annotation, e.g. `± 3`.
    pub range: Option<String>,
    /// Unit of the primary value, optionally followed by secondary metrics,
    /// e.g. `ns/op\t   31984 B/op\t     909 allocs/op`.
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Free-text annotation, e.g. `146142 times\n2 procs`.
    pub extra: Option<String>,
}

impl Measurement {
    /// Integers above this magnitude are not exactly representable in a JavaScript number.
    pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

    /// The secondary metric unit for allocated bytes.
    pub const UNIT_BYTES_PER_OP: &'static str = "B/op";

    /// The secondary metric unit for allocations.
    pub const UNIT_ALLOCS_PER_OP: &'static str = "allocs/op";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, value: f64, unit: String, extra: Option<String>) -> Self {
        Self {
            name,
            value,
            range: None,
            unit,
            extra,
        }
    }

    ///
    /// Returns the unit of the primary value.
    ///
    pub fn primary_unit(&self) -> &str {
        self.unit.split_whitespace().next().unwrap_or_default()
    }

    ///
    /// Returns the `(value, unit)` pairs following the primary unit.
    /// Tokens that do not form a pair are ignored.
    ///
    pub fn secondary_metrics(&self) -> Vec<(f64, &str)> {
        let tokens: Vec<&str> = self.unit.split_whitespace().skip(1).collect();
        tokens
            .chunks_exact(2)
            .filter_map(|pair| {
                pair[0]
                    .parse::<f64>()
                    .ok()
                    .map(|value| (value, pair[1]))
            })
            .collect()
    }

    ///
    /// Returns the secondary metric reported in `unit`, if any.
    ///
    pub fn secondary_metric(&self, unit: &str) -> Option<f64> {
        self.secondary_metrics()
            .into_iter()
            .find_map(|(value, metric_unit)| (metric_unit == unit).then_some(value))
    }

    ///
    /// Returns the number of iterations from the `extra` annotation.
    ///
    pub fn iterations(&self) -> Option<u64> {
        self.extra_counter("times")
    }

    ///
    /// Returns the parallelism from the `extra` annotation.
    ///
    pub fn procs(&self) -> Option<u64> {
        self.extra_counter("procs")
    }

    ///
    /// Whether a higher value of this measurement is an improvement.
    /// Throughput units are the only ones where it holds.
    ///
    pub fn is_bigger_better(&self) -> bool {
        let unit = self.primary_unit().to_lowercase();
        unit.ends_with("/s") || unit.ends_with("/sec") || unit.starts_with("ops")
    }

    ///
    /// Looks for a `<count> <suffix>` line in the `extra` annotation.
    ///
    fn extra_counter(&self, suffix: &str) -> Option<u64> {
        self.extra.as_deref()?.lines().find_map(|line| {
            let mut parts = line.split_whitespace();
            let count = parts.next()?.parse::<u64>().ok()?;
            (parts.next() == Some(suffix)).then_some(count)
        })
    }
}

///
/// Writes integral values without a fractional part, the way JavaScript prints numbers.
///
fn serialize_value<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < Measurement::MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
