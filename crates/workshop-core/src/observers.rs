//! Concrete timing observer implementations.

use crossbeam_channel::Sender;
use tracing::info;

use crate::observer::{TimingObserver, TimingReport};

/// Observer that forwards reports through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<TimingReport>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<TimingReport>) -> Self {
        Self { sender }
    }
}

impl TimingObserver for ChannelObserver {
    fn on_timing(&self, report: &TimingReport) {
        // A full or disconnected channel drops the report.
        let _ = self.sender.try_send(report.clone());
    }
}

/// Observer that logs every report.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingObserver for LoggingObserver {
    fn on_timing(&self, report: &TimingReport) {
        info!(
            label = %report.label,
            elapsed = format!("{:.8}s", report.seconds()),
            "timed computation finished"
        );
    }
}

/// Observer that discards all reports.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingObserver for NoOpObserver {
    fn on_timing(&self, _report: &TimingReport) {}
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn channel_observer_sends() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        let observer = ChannelObserver::new(tx);
        observer.on_timing(&TimingReport::new("merge sort", Duration::from_micros(3)));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.label, "merge sort");
        assert_eq!(received.elapsed, Duration::from_micros(3));
    }

    #[test]
    fn channel_observer_full_channel_does_not_panic() {
        let (tx, _rx) = crossbeam_channel::bounded(1);
        let observer = ChannelObserver::new(tx);
        observer.on_timing(&TimingReport::new("a", Duration::ZERO));
        observer.on_timing(&TimingReport::new("b", Duration::ZERO));
    }

    #[test]
    fn channel_observer_disconnected_does_not_panic() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        drop(rx);
        ChannelObserver::new(tx).on_timing(&TimingReport::new("a", Duration::ZERO));
    }

    #[test]
    fn logging_observer_does_not_panic() {
        LoggingObserver::new().on_timing(&TimingReport::new("a", Duration::from_nanos(10)));
    }

    #[test]
    fn noop_observer_default() {
        NoOpObserver::default().on_timing(&TimingReport::new("a", Duration::ZERO));
    }
}
