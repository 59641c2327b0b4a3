//! Strategy identifiers, factory, and registry.
//!
//! Identifiers form a closed enum, so mapping an identifier to its strategy
//! is an exhaustive match. Free-form labels coming from a UI are resolved by
//! exact string match only; a miss is reported, never raised.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::factorial::RecursiveFactorial;
use crate::fibonacci::TabulatedFibonacci;
use crate::input::Field;
use crate::merge_sort::MergeSort;
use crate::palindrome::PalindromeCounter;
use crate::rsa::ToyRsa;
use crate::shuffle::DeckShuffle;
use crate::sorting::QuadraticSort;
use crate::statistics::OrderStatistics;
use crate::strategy::{Strategy, StrategySession, WorkshopError};

/// Stable identifier of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyId {
    /// Toy RSA cipher over small primes.
    Rsa,
    /// Tabulated Fibonacci.
    Fibonacci,
    /// Bubble or selection sort.
    Sorting,
    /// Timed merge sort.
    MergeSort,
    /// Fisher-Yates deck shuffle.
    Shuffle,
    /// Recursive factorial.
    Factorial,
    /// Order statistics over a list.
    Search,
    /// Palindromic substring counter.
    Palindrome,
}

impl StrategyId {
    /// Every identifier, in menu order.
    pub const ALL: [StrategyId; 8] = [
        Self::Rsa,
        Self::Fibonacci,
        Self::Sorting,
        Self::MergeSort,
        Self::Shuffle,
        Self::Factorial,
        Self::Search,
        Self::Palindrome,
    ];

    /// Menu label, also the exact-match lookup key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rsa => "RSA Encryption",
            Self::Fibonacci => "Fibonacci (DP)",
            Self::Sorting => "Sorting (Bubble/Selection)",
            Self::MergeSort => "Merge Sort (Divide & Conquer)",
            Self::Shuffle => "Shuffle Deck",
            Self::Factorial => "Factorial",
            Self::Search => "Search",
            Self::Palindrome => "Palindrome Counter",
        }
    }

    /// Short command-line name.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Rsa => "rsa",
            Self::Fibonacci => "fibonacci",
            Self::Sorting => "sorting",
            Self::MergeSort => "merge-sort",
            Self::Shuffle => "shuffle",
            Self::Factorial => "factorial",
            Self::Search => "search",
            Self::Palindrome => "palindrome",
        }
    }

    /// Resolve a menu label. No trimming, no case folding.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.label() == label)
    }

    /// Resolve a command-line name.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    /// Fields the strategy's form asks for, with their prompts.
    #[must_use]
    pub fn prompts(self) -> &'static [(Field, &'static str)] {
        match self {
            Self::Rsa => &[
                (Field::Text, "Enter Message to Encrypt/Decrypt:"),
                (
                    Field::Keys,
                    "Enter 2 Keys to Encrypt/Decrypt Separated by ',' (leave blank for random Keys):",
                ),
            ],
            Self::Fibonacci => &[(Field::Text, "Enter number of steps in sequence")],
            Self::Sorting => &[
                (Field::Text, "Enter Comma separated list"),
                (Field::Method, "Bubble or Selection (blank for Bubble)"),
                (Field::Order, "Ascending or Descending (blank for Ascending)"),
            ],
            Self::MergeSort => &[
                (Field::Text, "Enter Comma separated list"),
                (Field::Order, "Ascending or Descending (blank for Ascending)"),
            ],
            Self::Shuffle => &[],
            Self::Factorial => &[(Field::Text, "Enter a non-negative integer:")],
            Self::Search => &[(Field::Text, "Enter numbers separated by commas:")],
            Self::Palindrome => &[(Field::Text, "Enter a string:")],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Factory trait for looking up strategies.
pub trait StrategyFactory: Send + Sync {
    /// Strategy for a known identifier.
    fn strategy(&self, id: StrategyId) -> Arc<dyn Strategy>;

    /// Look up a strategy by menu label.
    fn resolve(&self, label: &str) -> Option<Arc<dyn Strategy>>;

    /// Like `resolve`, but reports a miss as `WorkshopError::NotFound`.
    fn get(&self, label: &str) -> Result<Arc<dyn Strategy>, WorkshopError> {
        self.resolve(label)
            .ok_or_else(|| WorkshopError::NotFound(label.to_string()))
    }

    /// List all registered identifiers.
    fn available(&self) -> Vec<StrategyId>;
}

/// Default registry: one strategy per identifier, built at construction and
/// immutable afterwards.
pub struct DefaultRegistry {
    table: Vec<Arc<dyn Strategy>>,
}

impl DefaultRegistry {
    /// Build the table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: StrategyId::ALL.into_iter().map(Self::create_strategy).collect(),
        }
    }

    fn create_strategy(id: StrategyId) -> Arc<dyn Strategy> {
        match id {
            StrategyId::Rsa => Arc::new(StrategySession::new(id, ToyRsa::new())),
            StrategyId::Fibonacci => Arc::new(StrategySession::new(id, TabulatedFibonacci::new())),
            StrategyId::Sorting => Arc::new(StrategySession::new(id, QuadraticSort::new())),
            StrategyId::MergeSort => Arc::new(StrategySession::new(id, MergeSort::new())),
            StrategyId::Shuffle => Arc::new(StrategySession::new(id, DeckShuffle::new())),
            StrategyId::Factorial => Arc::new(StrategySession::new(id, RecursiveFactorial::new())),
            StrategyId::Search => Arc::new(StrategySession::new(id, OrderStatistics::new())),
            StrategyId::Palindrome => Arc::new(StrategySession::new(id, PalindromeCounter::new())),
        }
    }
}

impl Default for DefaultRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyFactory for DefaultRegistry {
    fn strategy(&self, id: StrategyId) -> Arc<dyn Strategy> {
        // `table` is built from `StrategyId::ALL` in declaration order.
        Arc::clone(&self.table[id.index()])
    }

    fn resolve(&self, label: &str) -> Option<Arc<dyn Strategy>> {
        match StrategyId::from_label(label) {
            Some(id) => {
                debug!(strategy = id.label(), "resolved strategy");
                Some(self.strategy(id))
            }
            None => {
                warn!(label, "no strategy registered for label");
                None
            }
        }
    }

    fn available(&self) -> Vec<StrategyId> {
        StrategyId::ALL.to_vec()
    }
}
