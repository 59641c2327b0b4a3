//! Naive recursive factorial with an explicit depth guard.

use num_bigint::BigUint;
use num_traits::One;

use crate::input::{parse_integer, Field, RawInput};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// n! by plain recursion, no memoization.
///
/// Recursion depth equals `n`; callers bound `n` first.
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::one()
    } else {
        factorial(n - 1) * n
    }
}

/// n! together with n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialResult {
    pub n: u64,
    pub value: BigUint,
}

/// Recursive factorial strategy.
pub struct RecursiveFactorial;

impl RecursiveFactorial {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check `n` against the sign and depth rules.
    pub fn check(n: i64, limit: u64) -> Result<u64, WorkshopError> {
        let n = u64::try_from(n)
            .map_err(|_| WorkshopError::Validation("Enter a positive number".into()))?;
        if n > limit {
            return Err(WorkshopError::Validation(
                "Number too large for recursion".into(),
            ));
        }
        Ok(n)
    }
}

impl Default for RecursiveFactorial {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for RecursiveFactorial {
    type Input = u64;
    type Output = FactorialResult;

    fn validate(&self, raw: &RawInput, opts: &Options) -> Result<Option<u64>, WorkshopError> {
        let n = parse_integer(raw.get(Field::Text))?;
        Self::check(n, opts.factorial_limit).map(Some)
    }

    fn compute(
        &self,
        n: u64,
        _ctx: &ExecutionContext<'_>,
    ) -> Result<FactorialResult, WorkshopError> {
        Ok(FactorialResult {
            n,
            value: factorial(n),
        })
    }

    fn describe(&self, output: &FactorialResult) -> Description {
        Description::new(
            "Factorial",
            format!("Calculated factorial of {} as {}", output.n, output.value),
        )
    }

    fn render(&self, output: &FactorialResult) -> String {
        format!("Result: {}", output.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FACTORIAL_RECURSION_LIMIT;

    #[test]
    fn small_values() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(1), BigUint::one());
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(20), BigUint::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn recurrence_holds() {
        for n in 1..50u64 {
            assert_eq!(factorial(n), factorial(n - 1) * n);
        }
    }

    #[test]
    fn limit_is_accepted() {
        let n = RecursiveFactorial::check(992, FACTORIAL_RECURSION_LIMIT).unwrap();
        let digits = factorial(n).to_string().len();
        assert_eq!(digits, 2544);
    }

    #[test]
    fn above_limit_is_rejected() {
        let err = RecursiveFactorial::check(993, FACTORIAL_RECURSION_LIMIT).unwrap_err();
        assert_eq!(err.to_string(), "Number too large for recursion");
    }

    #[test]
    fn negative_is_rejected() {
        let err = RecursiveFactorial::check(-1, FACTORIAL_RECURSION_LIMIT).unwrap_err();
        assert_eq!(err.to_string(), "Enter a positive number");
    }

    #[test]
    fn validate_parses_text_field() {
        let algo = RecursiveFactorial::new();
        let opts = Options::default();
        assert_eq!(algo.validate(&RawInput::new(" 7 "), &opts).unwrap(), Some(7));
        assert_eq!(
            algo.validate(&RawInput::new("x"), &opts).unwrap_err().to_string(),
            "Invalid input"
        );
    }

    #[test]
    fn render_and_describe() {
        let algo = RecursiveFactorial::new();
        let output = FactorialResult {
            n: 5,
            value: factorial(5),
        };
        assert_eq!(algo.render(&output), "Result: 120");
        assert_eq!(algo.describe(&output).detail, "Calculated factorial of 5 as 120");
    }
}
