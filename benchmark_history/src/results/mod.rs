//!
//! The benchmark comparison results.
//!

pub mod comparison;

use colored::Colorize;

use crate::model::run::Run;

use self::comparison::Comparison;

///
/// The benchmark comparison results.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// The previous run.
    pub previous: &'a Run,
    /// The latest run.
    pub latest: &'a Run,
    /// The ratio at which a measurement is reported as a regression.
    pub alert_threshold: f64,

    /// The best ratio.
    pub best: f64,
    /// The worst ratio.
    pub worst: f64,
    /// The geometric mean of all ratios.
    pub total: f64,
    /// The measurements that got worse.
    pub negatives: Vec<Comparison<'a>>,
    /// The measurements that got better.
    pub positives: Vec<Comparison<'a>>,
    /// The number of measurements with an identical value.
    pub unchanged: usize,

    /// The measurements only reported by the latest run.
    pub added: Vec<&'a str>,
    /// The measurements only reported by the previous run.
    pub removed: Vec<&'a str>,
}

impl<'a> Results<'a> {
    ///
    /// Aggregates measurement comparisons.
    ///
    pub fn new(
        previous: &'a Run,
        latest: &'a Run,
        alert_threshold: f64,
        comparisons: Vec<Comparison<'a>>,
        added: Vec<&'a str>,
        removed: Vec<&'a str>,
    ) -> Self {
        let mut best = 1.0;
        let mut worst = 1.0;
        let mut log_sum = 0.0;
        let mut log_count = 0;
        let mut negatives = Vec::with_capacity(comparisons.len());
        let mut positives = Vec::with_capacity(comparisons.len());
        let mut unchanged = 0;

        for comparison in comparisons.into_iter() {
            let ratio = comparison.ratio;
            if ratio < best {
                best = ratio;
            }
            if ratio > worst {
                worst = ratio;
            }
            if ratio.is_finite() && ratio > 0.0 {
                log_sum += ratio.ln();
                log_count += 1;
            }

            if ratio > 1.0 {
                negatives.push(comparison);
            } else if ratio < 1.0 {
                positives.push(comparison);
            } else {
                unchanged += 1;
            }
        }

        let total = if log_count == 0 {
            1.0
        } else {
            (log_sum / (log_count as f64)).exp()
        };

        Self {
            previous,
            latest,
            alert_threshold,
            best,
            worst,
            total,
            negatives,
            positives,
            unchanged,
            added,
            removed,
        }
    }

    ///
    /// Returns the measurements that got worse by at least the alert threshold.
    ///
    pub fn regressions(&self) -> impl Iterator<Item = &Comparison<'a>> {
        self.negatives
            .iter()
            .filter(|comparison| comparison.ratio >= self.alert_threshold)
    }

    ///
    /// Whether any measurement reached the alert threshold.
    ///
    pub fn has_alerts(&self) -> bool {
        self.regressions().next().is_some()
    }

    ///
    /// Sorts the results from the most significant change to the least significant one.
    ///
    pub fn sort_worst(&mut self) {
        self.negatives.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        self.positives.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
    }

    ///
    /// Writes the top benchmark results to the terminal.
    ///
    pub fn print_top_results(&self, count: usize) {
        println!(
            "Worst {} out of {} (-%):",
            count.min(self.negatives.len()),
            self.negatives.len()
        );
        for comparison in self.negatives.iter().take(count) {
            println!("{:>10}: {comparison}", Self::format_f64(comparison.ratio));
        }
        println!();
        println!(
            "Best {} out of {} (-%):",
            count.min(self.positives.len()),
            self.positives.len()
        );
        for comparison in self.positives.iter().take(count) {
            println!("{:>10}: {comparison}", Self::format_f64(comparison.ratio));
        }
        println!();
    }

    ///
    /// Prints the results summary and the alerts to a writer.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let title = format!(
            "{} vs {}",
            self.previous.commit.short_id(),
            self.latest.commit.short_id()
        );
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            "Change (-%)".bright_white(),
            "═".repeat(32usize.saturating_sub(title.len())),
            title.bright_white()
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Best".bright_white(),
            Self::format_f64(self.best)
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Worst".bright_white(),
            Self::format_f64(self.worst)
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Total".bright_white(),
            Self::format_f64(self.total)
        )?;

        writeln!(
            w,
            "╠═╡ {} ╞{}╣",
            "Counts".bright_white(),
            "═".repeat(43)
        )?;
        for (caption, count) in [
            ("Worse", self.negatives.len()),
            ("Better", self.positives.len()),
            ("Unchanged", self.unchanged),
            ("Added", self.added.len()),
            ("Removed", self.removed.len()),
        ] {
            writeln!(w, "║ {:43} {count:7} ║", caption.bright_white())?;
        }

        let threshold = format!("{:.0}%", self.alert_threshold * 100.0);
        writeln!(
            w,
            "╠═╡ {} ╞{}╡ {} ╞═╣",
            "Alerts".bright_white(),
            "═".repeat(37usize.saturating_sub(threshold.len())),
            threshold.bright_white()
        )?;
        let mut has_alerts = false;
        for comparison in self.regressions() {
            has_alerts = true;
            writeln!(
                w,
                "║ {:43} {:7.3} ║",
                comparison.to_string().bright_red(),
                comparison.ratio
            )?;
        }
        if !has_alerts {
            writeln!(w, "║ {:51} ║", "None".green())?;
        }
        writeln!(w, "╚{}╝", "═".repeat(53))?;

        Ok(())
    }

    ///
    /// Formats and colorizes an `f64` value.
    ///
    fn format_f64(value: f64) -> colored::ColoredString {
        if value > 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).bright_red()
        } else if value == 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).white()
        } else {
            format!("{:7.3}", 100.0 - value * 100.0).green()
        }
    }
}
