//! Orchestration interfaces.

use serde::Serialize;

use workshop_core::history::HistoryEntry;
use workshop_core::observer::TimingReport;
use workshop_core::registry::StrategyId;
use workshop_core::strategy::Report;

/// Trait for presenting runs to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a completed run.
    fn present_record(&self, record: &RunRecord);

    /// Present a timing notification as soon as it arrives.
    fn present_timing(&self, report: &TimingReport);

    /// Present the history, most recent first.
    fn present_history(&self, entries: &[HistoryEntry]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Everything produced by one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// Strategy label.
    pub strategy: String,
    /// Human-readable result text.
    pub display: String,
    /// Duration of the timed computation, if the strategy is timed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
    /// Timing reports raised during the run.
    #[serde(skip)]
    pub timings: Vec<TimingReport>,
    /// History after the run, oldest first.
    pub history: Vec<HistoryEntry>,
}

impl RunRecord {
    /// Build a record from a report and the reports collected while it ran.
    #[must_use]
    pub fn new(report: Report, timings: Vec<TimingReport>, history: Vec<HistoryEntry>) -> Self {
        let elapsed_secs = (!timings.is_empty())
            .then(|| timings.iter().map(TimingReport::seconds).sum::<f64>());
        Self {
            strategy: report.strategy.label().to_string(),
            display: report.display,
            elapsed_secs,
            timings,
            history,
        }
    }

    /// The strategy that produced this record.
    #[must_use]
    pub fn strategy_id(&self) -> Option<StrategyId> {
        StrategyId::from_label(&self.strategy)
    }
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_record(&self, _record: &RunRecord) {}
    fn present_timing(&self, _report: &TimingReport) {}
    fn present_history(&self, _entries: &[HistoryEntry]) {}
    fn present_error(&self, _error: &str) {}
}
