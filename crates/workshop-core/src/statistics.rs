//! Order statistics: extremes, mode, median, and quartiles.

use std::collections::BTreeMap;
use std::fmt;

use crate::input::{format_list, parse_int_list, Field, RawInput};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// Most frequent values of a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// All values tied at the highest frequency, ascending.
    Values(Vec<i64>),
    /// The tie set is as large as the sample itself.
    NoUniqueMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => f.write_str(&format_list(values)),
            Self::NoUniqueMode => f.write_str("No unique mode"),
        }
    }
}

/// Summary of a non-empty sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub smallest: i64,
    pub largest: i64,
    pub mode: Mode,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

impl Statistics {
    /// Summarize `values`; `None` when empty.
    #[must_use]
    pub fn summarize(values: &[i64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let (&smallest, &largest) = (sorted.first()?, sorted.last()?);
        Some(Self {
            smallest,
            largest,
            mode: mode(&sorted),
            median: percentile(&sorted, 0.5),
            q1: percentile(&sorted, 0.25),
            q3: percentile(&sorted, 0.75),
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Smallest: {}", self.smallest)?;
        writeln!(f, "Largest:  {}", self.largest)?;
        writeln!(f, "Mode:     {}", self.mode)?;
        writeln!(f, "Median:   {:.2}", self.median)?;
        writeln!(f, "1st Q (Q1): {:.2}", self.q1)?;
        write!(f, "3rd Q (Q3): {:.2}", self.q3)
    }
}

/// Values tied at the highest frequency.
///
/// Reports [`Mode::NoUniqueMode`] when the tie set is as long as the input,
/// which happens exactly when every value occurs once.
#[must_use]
pub fn mode(values: &[i64]) -> Mode {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_default() += 1;
    }
    let Some(&max_count) = counts.values().max() else {
        return Mode::NoUniqueMode;
    };
    let modes: Vec<i64> = counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect();
    if modes.len() < values.len() {
        Mode::Values(modes)
    } else {
        Mode::NoUniqueMode
    }
}

/// Linear-interpolation percentile of an ascending, non-empty slice.
///
/// `p` is a fraction in `[0, 1]`. The rank `p * (n - 1)` is split into a
/// whole index and a fractional weight between that element and the next.
///
/// # Panics
///
/// Panics if `sorted` is empty.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn percentile(sorted: &[i64], p: f64) -> f64 {
    let index = p * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = lower + 1;
    if upper >= sorted.len() {
        return sorted[lower] as f64;
    }
    let weight = index - lower as f64;
    sorted[lower] as f64 * (1.0 - weight) + sorted[upper] as f64 * weight
}

/// The sample as entered and its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub values: Vec<i64>,
    pub stats: Statistics,
}

/// Order statistics strategy.
pub struct OrderStatistics;

impl OrderStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for OrderStatistics {
    type Input = Vec<i64>;
    type Output = StatisticsReport;

    fn validate(&self, raw: &RawInput, _opts: &Options) -> Result<Option<Vec<i64>>, WorkshopError> {
        let values = parse_int_list(raw.get(Field::Text))?;
        Ok((!values.is_empty()).then_some(values))
    }

    fn compute(
        &self,
        values: Vec<i64>,
        _ctx: &ExecutionContext<'_>,
    ) -> Result<StatisticsReport, WorkshopError> {
        let stats = Statistics::summarize(&values)
            .ok_or_else(|| WorkshopError::Validation("No numbers to summarize".into()))?;
        Ok(StatisticsReport { values, stats })
    }

    fn describe(&self, output: &StatisticsReport) -> Description {
        let stats = &output.stats;
        Description::new(
            format!("Searched {}", format_list(&output.values)),
            format!(
                "smallest {}, largest {}, mode {}, median {:.2}, Q1 {:.2}, Q3 {:.2}",
                stats.smallest, stats.largest, stats.mode, stats.median, stats.q1, stats.q3
            ),
        )
    }

    fn render(&self, output: &StatisticsReport) -> String {
        output.stats.to_string()
    }
}
