//! Observer pattern for timing notifications.
//!
//! Timing reports travel on a side channel, separate from a strategy's
//! return value, so a presenter can show them independently of the result.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::Serialize;

use crate::constants::TIMING_PRECISION;

/// Elapsed wall-clock time around one wrapped computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingReport {
    /// What was timed.
    pub label: String,
    /// Measured duration.
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl TimingReport {
    /// Create a new timing report.
    #[must_use]
    pub fn new(label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            elapsed,
        }
    }

    /// Elapsed time in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// The notification text, e.g. `Time taken: 0.00001234 seconds`.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Time taken: {:.prec$} seconds",
            self.seconds(),
            prec = TIMING_PRECISION
        )
    }
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Observer trait for receiving timing reports.
pub trait TimingObserver: Send + Sync {
    /// Receive a timing report.
    fn on_timing(&self, report: &TimingReport);
}

/// Subject that fans a report out to every registered observer.
pub struct TimingSubject {
    observers: RwLock<Vec<Arc<dyn TimingObserver>>>,
}

impl TimingSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn TimingObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for TimingSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingObserver for TimingSubject {
    fn on_timing(&self, report: &TimingReport) {
        for observer in self.observers.read().iter() {
            observer.on_timing(report);
        }
    }
}
