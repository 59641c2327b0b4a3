//! Cross-crate integration tests for the algorithm workshop live in `tests/`.
