//! Bounded, process-wide execution history.
//!
//! Every successful strategy run appends one timestamped line. Only the
//! last [`HISTORY_CAPACITY`] entries are kept; the oldest is evicted first.
//! Snapshots are returned oldest-to-newest, and callers that want the most
//! recent run first reverse them.

use std::collections::VecDeque;
use std::fmt;

use chrono::{Local, NaiveTime, Timelike};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::constants::HISTORY_CAPACITY;

/// One completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Wall-clock time of the run, second precision.
    #[serde(serialize_with = "serialize_clock")]
    pub timestamp: NaiveTime,
    /// Short name of what ran.
    pub label: String,
    /// Free-form description of the result.
    pub detail: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the given time, truncated to whole seconds.
    #[must_use]
    pub fn new(timestamp: NaiveTime, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            label: label.into(),
            detail: detail.into(),
        }
    }

    /// Create an entry stamped with the current local time.
    #[must_use]
    pub fn now(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Local::now().time(), label, detail)
    }

    /// The timestamp rendered as `HH:MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.clock(), self.label, self.detail)
    }
}

fn serialize_clock<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&time.format("%H:%M:%S"))
}

/// Fixed-capacity FIFO log shared by all strategies.
///
/// Appends and snapshots are serialized behind a mutex, so the
/// `len() <= capacity` invariant holds even when the history is shared
/// across threads.
pub struct ExecutionHistory {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl ExecutionHistory {
    /// Create an empty history holding the last [`HISTORY_CAPACITY`] runs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom capacity (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    /// Record a run stamped with the current local time.
    pub fn append(&self, label: impl Into<String>, detail: impl Into<String>) {
        self.push(HistoryEntry::now(label, detail));
    }

    /// Record a prebuilt entry, evicting the oldest one when full.
    pub fn push(&self, entry: HistoryEntry) {
        debug!(label = %entry.label, "history append");
        let mut entries = self.entries.lock();
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Entries in insertion order, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Entries rendered as `[HH:MM:SS] label: detail`, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().iter().map(ToString::to_string).collect()
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no run has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ExecutionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn entry_display_format() {
        let entry = HistoryEntry::new(at(9, 5, 7), "Fibonacci", "Calculated sequence up to 10");
        assert_eq!(
            entry.to_string(),
            "[09:05:07] Fibonacci: Calculated sequence up to 10"
        );
    }

    #[test]
    fn entry_drops_subsecond_precision() {
        let time = NaiveTime::from_hms_milli_opt(12, 0, 1, 999).unwrap();
        let entry = HistoryEntry::new(time, "x", "y");
        assert_eq!(entry.timestamp, at(12, 0, 1));
    }

    #[test]
    fn new_history_is_empty() {
        let history = ExecutionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), HISTORY_CAPACITY);
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let history = ExecutionHistory::new();
        history.append("a", "1");
        history.append("b", "2");
        let labels: Vec<_> = history.snapshot().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn seven_appends_evict_two_oldest() {
        let history = ExecutionHistory::new();
        for i in 0..7 {
            history.push(HistoryEntry::new(at(10, 0, i), format!("run{i}"), ""));
        }
        let labels: Vec<_> = history.snapshot().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["run2", "run3", "run4", "run5", "run6"]);
    }

    #[test]
    fn never_exceeds_capacity() {
        let history = ExecutionHistory::new();
        for i in 0..50 {
            history.append("run", i.to_string());
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let history = ExecutionHistory::with_capacity(0);
        history.append("a", "");
        history.append("b", "");
        assert_eq!(history.len(), 1);
        assert_eq!(history.snapshot()[0].label, "b");
    }

    #[test]
    fn lines_render_entries() {
        let history = ExecutionHistory::new();
        history.push(HistoryEntry::new(at(23, 59, 59), "RSA", "ok"));
        assert_eq!(history.lines(), vec!["[23:59:59] RSA: ok".to_string()]);
    }

    #[test]
    fn entry_serializes_clock_string() {
        let entry = HistoryEntry::new(at(1, 2, 3), "Sorted", "[1, 2]");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "01:02:03");
        assert_eq!(json["label"], "Sorted");
    }

    #[test]
    fn concurrent_appends_respect_capacity() {
        use std::sync::Arc;

        let history = Arc::new(ExecutionHistory::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let history = Arc::clone(&history);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        history.append(format!("t{t}"), i.to_string());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }
}
