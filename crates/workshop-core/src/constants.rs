//! Constants for strategy limits, history capacity, and RSA parameters.

/// Number of runs kept by the execution history.
pub const HISTORY_CAPACITY: usize = 5;

/// Largest argument accepted by the recursive factorial.
///
/// A fixed depth guard so the accepted range does not depend on the
/// host's stack size.
pub const FACTORIAL_RECURSION_LIMIT: u64 = 992;

/// Largest index accepted by the tabulated Fibonacci strategy.
///
/// The table keeps every intermediate value, so memory grows
/// quadratically with the index; at this limit the table stays near 4 MB.
pub const FIBONACCI_TABLE_LIMIT: u64 = 10_000;

/// Preferred RSA public exponent.
pub const RSA_PUBLIC_EXPONENT: u64 = 65_537;

/// Public exponent used when the totient is not larger than the preferred one.
pub const RSA_FALLBACK_EXPONENT: u64 = 3;

/// Inclusive lower bound for randomly drawn RSA primes.
pub const RSA_PRIME_MIN: u64 = 10;

/// Inclusive upper bound for randomly drawn RSA primes.
pub const RSA_PRIME_MAX: u64 = 1000;

/// Largest prime bound accepted in options, so `n = p * q` fits in a `u64`.
pub const RSA_PRIME_CEILING: u64 = 0xFFFF_FFFF;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Decimal places used when reporting elapsed seconds.
pub const TIMING_PRECISION: usize = 8;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Input was rejected by a strategy.
    pub const ERROR_VALIDATION: i32 = 2;
    /// An algorithmic precondition did not hold (e.g. non-coprime RSA exponent).
    pub const ERROR_PRECONDITION: i32 = 3;
    /// Unknown strategy identifier.
    pub const ERROR_NOT_FOUND: i32 = 4;
}
