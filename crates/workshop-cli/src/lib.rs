//! # workshop-cli
//!
//! CLI output, interactive forms, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod prompt;
pub mod ui;

pub use presenter::{CLIResultPresenter, OutputMode};
pub use prompt::FormReader;
