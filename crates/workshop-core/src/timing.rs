//! Timing wrapper for arbitrary computations.
//!
//! [`Timed`] wraps any `Fn(A) -> R` and reports the wall-clock duration of
//! each whole call to a [`TimingObserver`], returning the wrapped result
//! untouched. Multi-argument computations take their arguments as a tuple.

use std::time::Instant;

use tracing::debug;

use crate::observer::{TimingObserver, TimingReport};

/// A computation decorated with elapsed-time reporting.
pub struct Timed<'o, F> {
    func: F,
    label: String,
    observer: &'o dyn TimingObserver,
}

impl<'o, F> Timed<'o, F> {
    /// Wrap `func`; reports go to `observer` under `label`.
    pub fn new(label: impl Into<String>, observer: &'o dyn TimingObserver, func: F) -> Self {
        Self {
            func,
            label: label.into(),
            observer,
        }
    }

    /// Label attached to the reports.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invoke the wrapped computation and report its duration.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let start = Instant::now();
        let result = (self.func)(args);
        self.report(start);
        result
    }

    /// Invoke a fallible computation; the duration is reported only on success.
    pub fn try_call<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
    {
        let start = Instant::now();
        let result = (self.func)(args)?;
        self.report(start);
        Ok(result)
    }

    /// Unwrap the decorator, returning the wrapped computation.
    pub fn into_inner(self) -> F {
        self.func
    }

    fn report(&self, start: Instant) {
        let report = TimingReport::new(self.label.clone(), start.elapsed());
        debug!(label = %report.label, secs = report.seconds(), "timing report");
        self.observer.on_timing(&report);
    }
}

/// Time a single zero-argument computation.
pub fn measure<T>(label: &str, observer: &dyn TimingObserver, func: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = func();
    observer.on_timing(&TimingReport::new(label, start.elapsed()));
    result
}
