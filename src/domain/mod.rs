//! Domain layer containing ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (fuzzy numbers, criteria, errors)
//! - `analysis` - Pure domain services for ranking (TOPSIS, fuzzy TOPSIS)

pub mod analysis;
pub mod foundation;
