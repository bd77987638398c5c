//!
//! A comparison of a single measurement between two runs.
//!

use crate::model::run::measurement::Measurement;

///
/// A comparison of a single measurement between two runs.
///
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    /// Measurement name.
    pub name: &'a str,
    /// Occurrence index among measurements sharing the name.
    pub occurrence: usize,
    /// The measurement in the previous run.
    pub previous: &'a Measurement,
    /// The measurement in the latest run.
    pub latest: &'a Measurement,
    /// How many times worse the latest value is. Values below `1.0` are improvements.
    pub ratio: f64,
}

impl<'a> Comparison<'a> {
    ///
    /// Compares two occurrences of a measurement.
    /// Returns `None` if the previous value is zero, since no ratio exists.
    ///
    pub fn new(
        name: &'a str,
        occurrence: usize,
        previous: &'a Measurement,
        latest: &'a Measurement,
    ) -> Option<Self> {
        if previous.value == 0.0 {
            return None;
        }
        let ratio = if latest.is_bigger_better() {
            previous.value / latest.value
        } else {
            latest.value / previous.value
        };
        Some(Self {
            name,
            occurrence,
            previous,
            latest,
            ratio,
        })
    }
}

impl std::fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)?;
        if self.occurrence > 0 {
            write!(f, "#{}", self.occurrence + 1)?;
        }
        write!(
            f,
            " ({} -> {} {})",
            self.previous.value,
            self.latest.value,
            self.latest.primary_unit()
        )
    }
}
