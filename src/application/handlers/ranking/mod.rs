//! Ranking command handlers.

mod calculate_fuzzy_topsis;
mod calculate_topsis;

pub use calculate_fuzzy_topsis::{
    CalculateFuzzyTopsisCommand, CalculateFuzzyTopsisHandler, CalculateFuzzyTopsisResult,
    FuzzyTopsisInput,
};
pub use calculate_topsis::{
    CalculateTopsisCommand, CalculateTopsisHandler, CalculateTopsisResult, TopsisInput,
};
