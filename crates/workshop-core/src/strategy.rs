//! Strategy traits and the `StrategySession` decorator.
//!
//! `Algorithm` is the internal trait implemented by each computation
//! (validate, compute, describe, render). `Strategy` is the object-safe
//! trait handed out by the registry. `StrategySession` adapts one to the
//! other and owns the history side effect: an entry is appended only after
//! a successful computation.

use tracing::{debug, info};

use crate::history::ExecutionHistory;
use crate::input::RawInput;
use crate::observer::TimingObserver;
use crate::options::Options;
use crate::registry::StrategyId;

/// Error type for strategy runs.
///
/// Every variant is recoverable; the display string is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkshopError {
    /// Raw input could not be parsed or is out of range.
    #[error("{0}")]
    Validation(String),

    /// An algorithmic precondition failed for otherwise valid input.
    #[error("{0}")]
    Precondition(String),

    /// No strategy is registered under the identifier.
    #[error("logic for {0} not found")]
    NotFound(String),
}

impl WorkshopError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Collaborators a strategy may use while running.
#[derive(Clone, Copy)]
pub struct ExecutionContext<'a> {
    /// Shared history receiving one entry per successful run.
    pub history: &'a ExecutionHistory,
    /// Destination for timing reports.
    pub observer: &'a dyn TimingObserver,
    /// Limits and parameters.
    pub options: &'a Options,
}

impl<'a> ExecutionContext<'a> {
    /// Bundle the collaborators for one run.
    #[must_use]
    pub fn new(
        history: &'a ExecutionHistory,
        observer: &'a dyn TimingObserver,
        options: &'a Options,
    ) -> Self {
        Self {
            history,
            observer,
            options,
        }
    }
}

/// History line produced by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub label: String,
    pub detail: String,
}

impl Description {
    #[must_use]
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// Result of a completed run, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Strategy that produced the result.
    pub strategy: StrategyId,
    /// Human-readable result text.
    pub display: String,
}

/// Outcome of a single strategy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The computation ran and was recorded in history.
    Completed(Report),
    /// Input was empty; nothing ran and nothing was recorded.
    Skipped,
}

impl RunOutcome {
    /// The report, if the run completed.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Skipped => None,
        }
    }
}

/// Internal trait for algorithm implementations.
/// Wrapped by `StrategySession`, which adds history recording.
pub trait Algorithm: Send + Sync {
    /// Normalized input.
    type Input;
    /// Result shape; only needs to be renderable as text.
    type Output;

    /// Parse and check raw input. `Ok(None)` means there is nothing to do.
    fn validate(&self, raw: &RawInput, opts: &Options)
        -> Result<Option<Self::Input>, WorkshopError>;

    /// Run the computation.
    fn compute(
        &self,
        input: Self::Input,
        ctx: &ExecutionContext<'_>,
    ) -> Result<Self::Output, WorkshopError>;

    /// History entry for a completed run.
    fn describe(&self, output: &Self::Output) -> Description;

    /// Display text for a completed run.
    fn render(&self, output: &Self::Output) -> String;
}

/// Public trait for runnable strategies, handed out by the registry.
pub trait Strategy: Send + Sync {
    /// Identifier this strategy is registered under.
    fn id(&self) -> StrategyId;

    /// Validate, compute, and record one run.
    fn run(&self, raw: &RawInput, ctx: &ExecutionContext<'_>) -> Result<RunOutcome, WorkshopError>;

    /// Display name.
    fn name(&self) -> &'static str {
        self.id().label()
    }
}

/// Decorator that turns an `Algorithm` into a `Strategy`.
pub struct StrategySession<A> {
    id: StrategyId,
    inner: A,
}

impl<A: Algorithm> StrategySession<A> {
    /// Create a new session for `inner`, registered as `id`.
    #[must_use]
    pub fn new(id: StrategyId, inner: A) -> Self {
        Self { id, inner }
    }

    /// The wrapped algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.inner
    }
}

impl<A: Algorithm> Strategy for StrategySession<A> {
    fn id(&self) -> StrategyId {
        self.id
    }

    fn run(&self, raw: &RawInput, ctx: &ExecutionContext<'_>) -> Result<RunOutcome, WorkshopError> {
        let Some(input) = self.inner.validate(raw, ctx.options)? else {
            debug!(strategy = self.id.label(), "empty input, nothing to run");
            return Ok(RunOutcome::Skipped);
        };

        let output = self.inner.compute(input, ctx)?;
        let description = self.inner.describe(&output);
        ctx.history.append(description.label, description.detail);

        info!(strategy = self.id.label(), "run complete");
        Ok(RunOutcome::Completed(Report {
            strategy: self.id,
            display: self.inner.render(&output),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Field;
    use crate::observers::NoOpObserver;

    struct Echo;

    impl Algorithm for Echo {
        type Input = String;
        type Output = String;

        fn validate(
            &self,
            raw: &RawInput,
            _opts: &Options,
        ) -> Result<Option<String>, WorkshopError> {
            match raw.get(Field::Text).trim() {
                "" => Ok(None),
                "bad" => Err(WorkshopError::validation("bad input")),
                text => Ok(Some(text.to_string())),
            }
        }

        fn compute(
            &self,
            input: String,
            _ctx: &ExecutionContext<'_>,
        ) -> Result<String, WorkshopError> {
            Ok(input.to_uppercase())
        }

        fn describe(&self, output: &String) -> Description {
            Description::new("Echo", output.clone())
        }

        fn render(&self, output: &String) -> String {
            format!("Result: {output}")
        }
    }

    fn run(
        session: &StrategySession<Echo>,
        text: &str,
        history: &ExecutionHistory,
    ) -> Result<RunOutcome, WorkshopError> {
        let observer = NoOpObserver::new();
        let opts = Options::default();
        let ctx = ExecutionContext::new(history, &observer, &opts);
        session.run(&RawInput::new(text), &ctx)
    }

    #[test]
    fn completed_run_appends_history() {
        let session = StrategySession::new(StrategyId::Palindrome, Echo);
        let history = ExecutionHistory::new();
        let outcome = run(&session, "abc", &history).unwrap();
        assert_eq!(outcome.report().unwrap().display, "Result: ABC");
        assert_eq!(history.snapshot()[0].detail, "ABC");
    }

    #[test]
    fn skipped_run_leaves_history_untouched() {
        let session = StrategySession::new(StrategyId::Palindrome, Echo);
        let history = ExecutionHistory::new();
        assert_eq!(run(&session, "   ", &history).unwrap(), RunOutcome::Skipped);
        assert!(history.is_empty());
    }

    #[test]
    fn failed_validation_never_reaches_history() {
        let session = StrategySession::new(StrategyId::Palindrome, Echo);
        let history = ExecutionHistory::new();
        let err = run(&session, "bad", &history).unwrap_err();
        assert_eq!(err, WorkshopError::Validation("bad input".into()));
        assert!(history.is_empty());
    }

    #[test]
    fn session_name_is_label() {
        let session = StrategySession::new(StrategyId::Palindrome, Echo);
        assert_eq!(session.name(), "Palindrome Counter");
        assert_eq!(session.id(), StrategyId::Palindrome);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            WorkshopError::NotFound("Quicksort".into()).to_string(),
            "logic for Quicksort not found"
        );
        assert_eq!(
            WorkshopError::Precondition("e and r are not coprime".into()).to_string(),
            "e and r are not coprime"
        );
    }
}
