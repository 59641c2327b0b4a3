//! Strategy options and configuration.

use crate::constants::{
    FACTORIAL_RECURSION_LIMIT, FIBONACCI_TABLE_LIMIT, RSA_FALLBACK_EXPONENT, RSA_PRIME_CEILING,
    RSA_PRIME_MAX, RSA_PRIME_MIN, RSA_PUBLIC_EXPONENT,
};
use crate::rsa::has_two_primes;

/// Tunable limits shared by all strategies.
#[derive(Debug, Clone)]
pub struct Options {
    /// Largest factorial argument accepted (recursion depth guard).
    pub factorial_limit: u64,
    /// Largest Fibonacci index accepted.
    pub fibonacci_limit: u64,
    /// Inclusive lower bound for random RSA primes.
    pub prime_min: u64,
    /// Inclusive upper bound for random RSA primes.
    pub prime_max: u64,
    /// Preferred RSA public exponent.
    pub public_exponent: u64,
    /// RSA public exponent used when the totient is too small.
    pub fallback_exponent: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            factorial_limit: FACTORIAL_RECURSION_LIMIT,
            fibonacci_limit: FIBONACCI_TABLE_LIMIT,
            prime_min: RSA_PRIME_MIN,
            prime_max: RSA_PRIME_MAX,
            public_exponent: RSA_PUBLIC_EXPONENT,
            fallback_exponent: RSA_FALLBACK_EXPONENT,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    ///
    /// Limits can only be lowered: values above the built-in guards are
    /// clamped to them. The default prime range replaces any range that
    /// cannot yield two distinct primes with `p * q` fitting a `u64`.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.factorial_limit == 0 {
            self.factorial_limit = FACTORIAL_RECURSION_LIMIT;
        }
        self.factorial_limit = self.factorial_limit.min(FACTORIAL_RECURSION_LIMIT);
        if self.fibonacci_limit == 0 {
            self.fibonacci_limit = FIBONACCI_TABLE_LIMIT;
        }
        self.fibonacci_limit = self.fibonacci_limit.min(FIBONACCI_TABLE_LIMIT);
        if self.prime_min == 0
            || self.prime_min >= self.prime_max
            || self.prime_max > RSA_PRIME_CEILING
            || !has_two_primes(self.prime_min, self.prime_max)
        {
            self.prime_min = RSA_PRIME_MIN;
            self.prime_max = RSA_PRIME_MAX;
        }
        if self.public_exponent == 0 {
            self.public_exponent = RSA_PUBLIC_EXPONENT;
        }
        if self.fallback_exponent == 0 {
            self.fallback_exponent = RSA_FALLBACK_EXPONENT;
        }
        self
    }
}
