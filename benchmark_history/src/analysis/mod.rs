//!
//! Provides tools for comparing benchmark runs.
//!

use std::collections::HashMap;

use crate::model::run::measurement::Measurement;
use crate::model::run::MeasurementKey;
use crate::model::run::Run;
use crate::results::comparison::Comparison;
use crate::results::Results;

/// A measurement at least twice as bad as before is reported as a regression.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 2.0;

///
/// Compares the `latest` run against the `previous` one.
///
/// Measurements are paired by name and occurrence index, so repeated names
/// are matched positionally. The comparisons keep the order of the latest run.
///
pub fn compare<'a>(previous: &'a Run, latest: &'a Run, alert_threshold: f64) -> Results<'a> {
    let mut previous_benches: HashMap<MeasurementKey<'a>, &'a Measurement> =
        previous.keyed_benches().into_iter().collect();

    let mut comparisons = Vec::with_capacity(latest.benches.len());
    let mut added = Vec::new();
    for ((name, occurrence), latest_measurement) in latest.keyed_benches().into_iter() {
        match previous_benches.remove(&(name, occurrence)) {
            Some(previous_measurement) => {
                if let Some(comparison) =
                    Comparison::new(name, occurrence, previous_measurement, latest_measurement)
                {
                    comparisons.push(comparison);
                }
            }
            None => added.push(name),
        }
    }

    let removed = previous
        .keyed_benches()
        .into_iter()
        .filter(|(key, _)| previous_benches.contains_key(key))
        .map(|((name, _), _)| name)
        .collect();

    Results::new(previous, latest, alert_threshold, comparisons, added, removed)
}
