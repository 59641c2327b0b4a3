//! # workshop-orchestration
//!
//! Strategy dispatch, shared history, and run records.

pub mod dispatcher;
pub mod interfaces;

pub use dispatcher::Workshop;
pub use interfaces::{NullPresenter, ResultPresenter, RunRecord};
