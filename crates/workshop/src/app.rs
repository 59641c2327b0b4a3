//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use tracing::{debug, info};

use workshop_cli::output::{format_menu, parse_menu_choice};
use workshop_cli::presenter::CLIResultPresenter;
use workshop_cli::FormReader;
use workshop_core::observer::TimingReport;
use workshop_core::observers::{ChannelObserver, LoggingObserver};
use workshop_core::strategy::WorkshopError;
use workshop_orchestration::interfaces::ResultPresenter;
use workshop_orchestration::Workshop;

use crate::config::AppConfig;

/// Prompt shown before each menu choice.
pub const MENU_PROMPT: &str = "Select an algorithm (number or name, q to quit):";

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        workshop_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let workshop = Workshop::new(config.options());
    workshop.register_observer(Arc::new(LoggingObserver::new()));
    let presenter = CLIResultPresenter::new(config.output_mode());

    if config.interactive {
        let stdin = io::stdin();
        return run_interactive(&workshop, &presenter, stdin.lock(), io::stdout());
    }

    run_once(config, &workshop, &presenter)
}

fn run_once(
    config: &AppConfig,
    workshop: &Workshop,
    presenter: &dyn ResultPresenter,
) -> Result<()> {
    let id = config
        .strategy()
        .context("no algorithm selected; pass --algo or --interactive")?;

    match workshop.run_recorded(id, &config.raw_input())? {
        Some(record) => {
            presenter.present_record(&record);
            for report in &record.timings {
                presenter.present_timing(report);
            }
        }
        None => info!(strategy = id.label(), "empty input, nothing to do"),
    }
    Ok(())
}

/// Menu loop: show history, pick a strategy, fill its form, show the result.
///
/// Strategy errors are shown and the loop continues. The loop ends on `q`
/// or at end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    workshop: &Workshop,
    presenter: &dyn ResultPresenter,
    input: R,
    output: W,
) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded();
    workshop.register_observer(Arc::new(ChannelObserver::new(tx)));

    let ids = workshop.available();
    let mut form = FormReader::new(input, output);

    loop {
        presenter.present_history(&workshop.get_history());
        for line in format_menu(&ids) {
            form.say(&line)?;
        }

        let Some(answer) = form.ask(MENU_PROMPT)? else {
            break;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            continue;
        }
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(id) = parse_menu_choice(answer, &ids) else {
            presenter.present_error(&WorkshopError::NotFound(answer.to_string()).to_string());
            continue;
        };
        let Some(raw) = form.read_form(id)? else {
            break;
        };

        debug!(strategy = id.label(), "running from menu");
        match workshop.run_selected(id.label(), &raw) {
            Ok(outcome) => {
                if let Some(report) = outcome.report() {
                    form.say(&report.display)?;
                }
            }
            Err(e) => presenter.present_error(&e.to_string()),
        }
        drain_timings(&rx, presenter);
    }

    Ok(())
}

fn drain_timings(rx: &Receiver<TimingReport>, presenter: &dyn ResultPresenter) {
    for report in rx.try_iter() {
        presenter.present_timing(&report);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use std::sync::Mutex;

    use workshop_core::history::HistoryEntry;
    use workshop_core::options::Options;
    use workshop_orchestration::interfaces::RunRecord;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        timings: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
        histories: Mutex<Vec<usize>>,
    }

    impl ResultPresenter for Recorder {
        fn present_record(&self, _record: &RunRecord) {}
        fn present_timing(&self, report: &TimingReport) {
            self.timings.lock().unwrap().push(report.label.clone());
        }
        fn present_history(&self, entries: &[HistoryEntry]) {
            self.histories.lock().unwrap().push(entries.len());
        }
        fn present_error(&self, error: &str) {
            self.errors.lock().unwrap().push(error.to_string());
        }
    }

    fn session(script: &str) -> (Workshop, Recorder, String) {
        let workshop = Workshop::new(Options::default());
        let recorder = Recorder::default();
        let mut out = Vec::new();
        run_interactive(&workshop, &recorder, Cursor::new(script.to_string()), &mut out).unwrap();
        (workshop, recorder, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quits_at_eof() {
        let (workshop, recorder, out) = session("");
        assert!(out.contains("1. RSA Encryption"));
        assert!(workshop.get_history().is_empty());
        assert_eq!(*recorder.histories.lock().unwrap(), vec![0]);
    }

    #[test]
    fn runs_a_strategy_then_quits() {
        let (workshop, recorder, out) = session("6\n5\nq\n");
        assert!(out.contains("Result: 120"));
        assert_eq!(workshop.get_history().len(), 1);
        assert_eq!(*recorder.histories.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn merge_sort_reports_timing() {
        let (_, recorder, out) = session("merge-sort\n3,2,1\n\nq\n");
        assert!(out.contains("Result: [1, 2, 3]"));
        assert_eq!(*recorder.timings.lock().unwrap(), vec!["Merge Sort".to_string()]);
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (workshop, recorder, _) = session("bogus\nFactorial\n-1\n6\nabc\nq\n");
        let errors = recorder.errors.lock().unwrap().clone();
        assert_eq!(
            errors,
            vec![
                "logic for bogus not found".to_string(),
                "Enter a positive number".to_string(),
                "Invalid input".to_string(),
            ]
        );
        assert!(workshop.get_history().is_empty());
    }
}
