//! Recursive merge sort (divide and conquer), timed as a whole.

use crate::input::{format_list, parse_int_list, Field, RawInput, SortOrder};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};
use crate::timing::Timed;

/// Label attached to merge sort timing reports.
pub const MERGE_SORT_TIMING_LABEL: &str = "Merge Sort";

/// Sort by splitting at the midpoint, sorting both halves, and merging.
#[must_use]
pub fn merge_sort<T: Ord + Clone>(values: &[T], order: SortOrder) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid], order);
    let right = merge_sort(&values[mid..], order);
    merge(&left, &right, order)
}

/// Merge two runs that are already sorted in `order`.
///
/// Ties take from the left run, so the merge is stable.
#[must_use]
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T], order: SortOrder) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if order.in_order(&left[i], &right[j]) {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Merge sort strategy; the whole recursive sort goes through the timing wrapper.
pub struct MergeSort;

impl MergeSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MergeSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for MergeSort {
    type Input = (Vec<i64>, SortOrder);
    type Output = Vec<i64>;

    fn validate(
        &self,
        raw: &RawInput,
        _opts: &Options,
    ) -> Result<Option<(Vec<i64>, SortOrder)>, WorkshopError> {
        let order = SortOrder::parse(raw.get(Field::Order))?;
        let values = parse_int_list(raw.get(Field::Text))?;
        Ok(Some((values, order)))
    }

    fn compute(
        &self,
        input: (Vec<i64>, SortOrder),
        ctx: &ExecutionContext<'_>,
    ) -> Result<Vec<i64>, WorkshopError> {
        let timed = Timed::new(
            MERGE_SORT_TIMING_LABEL,
            ctx.observer,
            |(values, order): (Vec<i64>, SortOrder)| merge_sort(&values, order),
        );
        Ok(timed.call(input))
    }

    fn describe(&self, output: &Vec<i64>) -> Description {
        Description::new(
            "Sorted",
            format!("{} with Merge Algorithm", format_list(output)),
        )
    }

    fn render(&self, output: &Vec<i64>) -> String {
        format!("Result: {}", format_list(output))
    }
}
