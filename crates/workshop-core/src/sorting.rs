//! Quadratic sorts: bubble and selection.

use tracing::debug;

use crate::input::{format_list, parse_int_list, Field, RawInput, SortMethod, SortOrder};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// Bubble sort with a fixed number of passes.
///
/// Always runs `len` full passes over adjacent pairs, even when the slice is
/// already sorted.
pub fn bubble_sort<T: Ord>(values: &mut [T], order: SortOrder) {
    let len = values.len();
    for _ in 0..len {
        for i in 0..len.saturating_sub(1) {
            if order.precedes(&values[i + 1], &values[i]) {
                values.swap(i, i + 1);
            }
        }
    }
}

/// Selection sort: each position receives the extreme of the remainder.
pub fn selection_sort<T: Ord>(values: &mut [T], order: SortOrder) {
    let len = values.len();
    for i in 0..len {
        let mut extreme = i;
        for j in i + 1..len {
            if order.precedes(&values[j], &values[extreme]) {
                extreme = j;
            }
        }
        if extreme != i {
            values.swap(i, extreme);
        }
    }
}

/// Normalized input for the quadratic sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub values: Vec<i64>,
    pub order: SortOrder,
    pub method: SortMethod,
}

/// Sorted values and the method that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub values: Vec<i64>,
    pub method: SortMethod,
}

/// Sorting session offering bubble and selection sort.
pub struct QuadraticSort;

impl QuadraticSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuadraticSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for QuadraticSort {
    type Input = SortRequest;
    type Output = SortOutcome;

    fn validate(
        &self,
        raw: &RawInput,
        _opts: &Options,
    ) -> Result<Option<SortRequest>, WorkshopError> {
        Ok(Some(SortRequest {
            values: parse_int_list(raw.get(Field::Text))?,
            order: SortOrder::parse(raw.get(Field::Order))?,
            method: SortMethod::parse(raw.get(Field::Method))?,
        }))
    }

    fn compute(
        &self,
        request: SortRequest,
        _ctx: &ExecutionContext<'_>,
    ) -> Result<SortOutcome, WorkshopError> {
        let SortRequest {
            mut values,
            order,
            method,
        } = request;
        debug!(len = values.len(), %order, %method, "quadratic sort");
        match method {
            SortMethod::Bubble => bubble_sort(&mut values, order),
            SortMethod::Selection => selection_sort(&mut values, order),
        }
        Ok(SortOutcome { values, method })
    }

    fn describe(&self, output: &SortOutcome) -> Description {
        Description::new(
            "Sorted",
            format!("{} with {} Algorithm", format_list(&output.values), output.method),
        )
    }

    fn render(&self, output: &SortOutcome) -> String {
        format!("Result: {}", format_list(&output.values))
    }
}
