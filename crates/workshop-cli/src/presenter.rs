//! CLI result presenter.

use workshop_core::history::HistoryEntry;
use workshop_core::observer::TimingReport;
use workshop_orchestration::interfaces::{ResultPresenter, RunRecord};

use crate::output::{format_history, format_json, HISTORY_HEADING};
use crate::ui;

/// How completed runs are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Header, result text, and timing lines.
    Text,
    /// Result text only.
    Quiet,
    /// One JSON document per run.
    Json,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    mode: OutputMode,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_record(&self, record: &RunRecord) {
        match self.mode {
            OutputMode::Json => match format_json(record) {
                Ok(json) => println!("{json}"),
                Err(e) => ui::print_error(&e.to_string()),
            },
            OutputMode::Quiet => println!("{}", record.display),
            OutputMode::Text => {
                ui::print_header(&record.strategy);
                println!("{}", record.display);
            }
        }
    }

    fn present_timing(&self, report: &TimingReport) {
        if self.mode == OutputMode::Text {
            ui::print_timing(&report.message());
        }
    }

    fn present_history(&self, entries: &[HistoryEntry]) {
        if self.mode == OutputMode::Json {
            return;
        }
        ui::print_header(HISTORY_HEADING);
        for line in format_history(entries) {
            ui::print_dim(&line);
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use workshop_core::registry::StrategyId;
    use workshop_core::strategy::Report;

    use super::*;

    fn record() -> RunRecord {
        RunRecord::new(
            Report {
                strategy: StrategyId::Factorial,
                display: "Result: 120".into(),
            },
            Vec::new(),
            vec![HistoryEntry::now("Factorial", "Calculated factorial of 5 as 120")],
        )
    }

    #[test]
    fn presenter_every_mode() {
        for mode in [OutputMode::Text, OutputMode::Quiet, OutputMode::Json] {
            let presenter = CLIResultPresenter::new(mode);
            assert_eq!(presenter.mode(), mode);
            presenter.present_record(&record());
            presenter.present_timing(&TimingReport::new("Merge Sort", Duration::from_micros(3)));
            presenter.present_history(&record().history);
            presenter.present_history(&[]);
        }
    }

    #[test]
    fn presenter_present_error() {
        let presenter = CLIResultPresenter::new(OutputMode::Text);
        presenter.present_error("Number too large for recursion");
    }
}
