//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    CalculateFuzzyTopsisCommand, CalculateFuzzyTopsisHandler, CalculateFuzzyTopsisResult,
    CalculateTopsisCommand, CalculateTopsisHandler, CalculateTopsisResult, FuzzyTopsisInput,
    TopsisInput,
};
