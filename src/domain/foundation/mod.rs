//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! the ranking domain.

mod criterion;
mod errors;
mod fuzzy_number;

pub use criterion::Criterion;
pub use errors::{ErrorCode, RankingError};
pub use fuzzy_number::{CombineMode, FuzzyOperand, TriangularFuzzyNumber};
