//! # workshop-core
//!
//! Algorithm strategies for the workshop: a toy RSA cipher, tabulated
//! Fibonacci, quadratic and merge sorts, a deck shuffle, recursive factorial,
//! order statistics, and a palindromic substring counter. Strategies are
//! looked up through a registry, record successful runs in a bounded
//! execution history, and report wall-clock timings to observers.

pub mod constants;
pub mod factorial;
pub mod fibonacci;
pub mod history;
pub mod input;
pub mod merge_sort;
pub mod observer;
pub mod observers;
pub mod options;
pub mod palindrome;
pub mod registry;
pub mod rsa;
pub mod shuffle;
pub mod sorting;
pub mod statistics;
pub mod strategy;
pub mod timing;

// Re-exports
pub use constants::{exit_codes, HISTORY_CAPACITY};
pub use history::{ExecutionHistory, HistoryEntry};
pub use input::{Field, RawInput, SortMethod, SortOrder};
pub use observer::{TimingObserver, TimingReport, TimingSubject};
pub use options::Options;
pub use registry::{DefaultRegistry, StrategyFactory, StrategyId};
pub use strategy::{ExecutionContext, Report, RunOutcome, Strategy, WorkshopError};
pub use timing::{measure, Timed};
