//! Application layer - Commands and Handlers.
//!
//! This layer validates boundary input, runs the domain rankers and applies
//! presentation settings from configuration.

pub mod handlers;

pub use handlers::{
    CalculateFuzzyTopsisCommand, CalculateFuzzyTopsisHandler, CalculateFuzzyTopsisResult,
    CalculateTopsisCommand, CalculateTopsisHandler, CalculateTopsisResult, FuzzyTopsisInput,
    TopsisInput,
};
