//! Fibonacci by tabulation (bottom-up dynamic programming).

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::input::{parse_integer, Field, RawInput};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// Compute F(n) by filling a table of F(0)..=F(n).
#[must_use]
pub fn tabulate(n: u64) -> BigUint {
    match n {
        0 => return BigUint::zero(),
        1 => return BigUint::one(),
        _ => {}
    }

    let len = usize::try_from(n).map_or(usize::MAX, |n| n.saturating_add(1));
    let mut table: Vec<BigUint> = Vec::with_capacity(len);
    table.push(BigUint::zero());
    table.push(BigUint::one());
    for i in 2..len {
        let next = &table[i - 1] + &table[i - 2];
        table.push(next);
    }
    table.pop().unwrap_or_default()
}

/// F(n) together with its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciResult {
    pub n: u64,
    pub value: BigUint,
}

/// Tabulated Fibonacci strategy.
pub struct TabulatedFibonacci;

impl TabulatedFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabulatedFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for TabulatedFibonacci {
    type Input = u64;
    type Output = FibonacciResult;

    fn validate(&self, raw: &RawInput, opts: &Options) -> Result<Option<u64>, WorkshopError> {
        let n = parse_integer(raw.get(Field::Text))?;
        let n = u64::try_from(n).map_err(|_| {
            WorkshopError::Validation("Invalid Input: n must be non-negative".into())
        })?;
        if n > opts.fibonacci_limit {
            return Err(WorkshopError::Validation(format!(
                "Number too large: the table is limited to n <= {}",
                opts.fibonacci_limit
            )));
        }
        Ok(Some(n))
    }

    fn compute(
        &self,
        n: u64,
        _ctx: &ExecutionContext<'_>,
    ) -> Result<FibonacciResult, WorkshopError> {
        Ok(FibonacciResult {
            n,
            value: tabulate(n),
        })
    }

    fn describe(&self, output: &FibonacciResult) -> Description {
        Description::new("Fibonacci", format!("Calculated sequence up to {}", output.n))
    }

    fn render(&self, output: &FibonacciResult) -> String {
        format!("Result: {}", output.value)
    }
}
