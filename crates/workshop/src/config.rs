//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use workshop_cli::OutputMode;
use workshop_core::input::RawInput;
use workshop_core::options::Options;
use workshop_core::registry::StrategyId;

/// Strategy names accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algo {
    Rsa,
    Fibonacci,
    Sorting,
    MergeSort,
    Shuffle,
    Factorial,
    Search,
    Palindrome,
}

impl From<Algo> for StrategyId {
    fn from(algo: Algo) -> Self {
        match algo {
            Algo::Rsa => Self::Rsa,
            Algo::Fibonacci => Self::Fibonacci,
            Algo::Sorting => Self::Sorting,
            Algo::MergeSort => Self::MergeSort,
            Algo::Shuffle => Self::Shuffle,
            Algo::Factorial => Self::Factorial,
            Algo::Search => Self::Search,
            Algo::Palindrome => Self::Palindrome,
        }
    }
}

/// Output format for one-shot runs.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Algorithm workshop: classic algorithms with a shared run history.
#[derive(Parser, Debug)]
#[command(name = "workshop", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Algorithm to run.
    #[arg(
        long,
        value_enum,
        env = "WORKSHOP_ALGO",
        required_unless_present_any = ["interactive", "completion"]
    )]
    pub algo: Option<Algo>,

    /// Main input: message, number, or comma-separated list.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub input: String,

    /// RSA primes as "p, q" (random when blank).
    #[arg(long, default_value = "")]
    pub keys: String,

    /// Sort order: Ascending or Descending.
    #[arg(long, default_value = "")]
    pub order: String,

    /// Quadratic sort method: bubble or selection.
    #[arg(long, default_value = "")]
    pub method: String,

    /// Start the interactive menu.
    #[arg(long, conflicts_with = "algo")]
    pub interactive: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Largest factorial argument (0 = default; may only lower the default).
    #[arg(long, default_value = "0")]
    pub factorial_limit: u64,

    /// Largest Fibonacci index (0 = default; may only lower the default).
    #[arg(long, default_value = "0")]
    pub fibonacci_limit: u64,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Selected strategy, if any.
    #[must_use]
    pub fn strategy(&self) -> Option<StrategyId> {
        self.algo.map(StrategyId::from)
    }

    /// Form fields for a one-shot run.
    #[must_use]
    pub fn raw_input(&self) -> RawInput {
        RawInput::new(self.input.clone())
            .with_keys(self.keys.clone())
            .with_order(self.order.clone())
            .with_method(self.method.clone())
    }

    /// Strategy options with command-line overrides.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            factorial_limit: self.factorial_limit,
            fibonacci_limit: self.fibonacci_limit,
            ..Options::default()
        }
        .normalize()
    }

    /// How results are written.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        match (self.format, self.quiet) {
            (Format::Json, _) => OutputMode::Json,
            (Format::Text, true) => OutputMode::Quiet,
            (Format::Text, false) => OutputMode::Text,
        }
    }
}
