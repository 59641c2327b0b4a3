//! Strategy dispatch over a shared history.

use std::sync::Arc;

use tracing::{debug, warn};

use workshop_core::history::{ExecutionHistory, HistoryEntry};
use workshop_core::input::RawInput;
use workshop_core::observer::{TimingObserver, TimingSubject};
use workshop_core::observers::ChannelObserver;
use workshop_core::options::Options;
use workshop_core::registry::{DefaultRegistry, StrategyFactory, StrategyId};
use workshop_core::strategy::{ExecutionContext, RunOutcome, WorkshopError};

use crate::interfaces::RunRecord;

/// Entry point for running strategies.
///
/// Owns the registry, the process-wide history, and the timing subject
/// that every run reports to.
pub struct Workshop {
    registry: Arc<dyn StrategyFactory>,
    history: Arc<ExecutionHistory>,
    timings: Arc<TimingSubject>,
    options: Options,
}

impl Workshop {
    /// Create a workshop with the default registry and a fresh history.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_parts(
            Arc::new(DefaultRegistry::new()),
            Arc::new(ExecutionHistory::new()),
            options,
        )
    }

    /// Create a workshop from explicit collaborators.
    #[must_use]
    pub fn with_parts(
        registry: Arc<dyn StrategyFactory>,
        history: Arc<ExecutionHistory>,
        options: Options,
    ) -> Self {
        Self {
            registry,
            history,
            timings: Arc::new(TimingSubject::new()),
            options: options.normalize(),
        }
    }

    /// Register an observer for every timing report.
    pub fn register_observer(&self, observer: Arc<dyn TimingObserver>) {
        self.timings.register(observer);
    }

    /// The shared history.
    #[must_use]
    pub fn history(&self) -> &Arc<ExecutionHistory> {
        &self.history
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Identifiers in menu order.
    #[must_use]
    pub fn available(&self) -> Vec<StrategyId> {
        self.registry.available()
    }

    /// Run the strategy registered under a menu label.
    ///
    /// An unknown label yields [`WorkshopError::NotFound`] and leaves the
    /// history untouched.
    pub fn run_selected(&self, label: &str, raw: &RawInput) -> Result<RunOutcome, WorkshopError> {
        let strategy = self.registry.get(label)?;
        self.execute(strategy.id(), raw, self.timings.as_ref())
    }

    /// Run a strategy by identifier.
    pub fn run(&self, id: StrategyId, raw: &RawInput) -> Result<RunOutcome, WorkshopError> {
        self.execute(id, raw, self.timings.as_ref())
    }

    /// Run a strategy and collect its result, timings, and the updated
    /// history into one record. `Ok(None)` means the input was empty.
    pub fn run_recorded(
        &self,
        id: StrategyId,
        raw: &RawInput,
    ) -> Result<Option<RunRecord>, WorkshopError> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let local = TimingSubject::new();
        local.register(Arc::clone(&self.timings) as Arc<dyn TimingObserver>);
        local.register(Arc::new(ChannelObserver::new(tx)));

        let outcome = self.execute(id, raw, &local)?;
        drop(local);

        Ok(match outcome {
            RunOutcome::Completed(report) => Some(RunRecord::new(
                report,
                rx.try_iter().collect(),
                self.history.snapshot(),
            )),
            RunOutcome::Skipped => None,
        })
    }

    /// History entries, oldest first.
    #[must_use]
    pub fn get_history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// History rendered as `[HH:MM:SS] label: detail`, oldest first.
    #[must_use]
    pub fn get_history_lines(&self) -> Vec<String> {
        self.history.lines()
    }

    fn execute(
        &self,
        id: StrategyId,
        raw: &RawInput,
        observer: &dyn TimingObserver,
    ) -> Result<RunOutcome, WorkshopError> {
        let strategy = self.registry.strategy(id);
        let ctx = ExecutionContext::new(&self.history, observer, &self.options);
        debug!(strategy = id.label(), "dispatching");
        let outcome = strategy.run(raw, &ctx);
        if let Err(ref e) = outcome {
            warn!(strategy = id.label(), error = %e, "run failed");
        }
        outcome
    }
}

impl Default for Workshop {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
