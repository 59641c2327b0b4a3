//! Workshop library: application logic for the `workshop` binary.

pub mod app;
pub mod config;
pub mod errors;
