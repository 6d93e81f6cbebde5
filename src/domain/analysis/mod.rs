//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that turn a decision matrix into
//! a ranking of options by their similarity to the ideal solution.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated long-form option x criterion table
//! - `CriteriaScoresTable` - Wide crisp input, melted into a matrix
//! - `FuzzyJudgments` / `JudgmentRow` - Multi decision-maker fuzzy input and consensus
//! - `TopsisAnalyzer` - Crisp TOPSIS (vector normalization, Euclidean distances)
//! - `FuzzyTopsisAnalyzer` - TOPSIS over triangular fuzzy numbers
//! - `RankingTable` - Performance scores with dense descending ranks
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod criteria_table;
mod decision_matrix;
mod fuzzy_topsis_analyzer;
mod judgments;
mod ranking;
mod topsis_analyzer;

// Re-export all public types
pub use criteria_table::{CriteriaScoresTable, CriteriaScoresTableBuilder, CriterionRow};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder, DecisionRow, MatrixEntry};
pub use fuzzy_topsis_analyzer::FuzzyTopsisAnalyzer;
pub use judgments::{
    aggregate_judgments, count_decision_makers, DecisionMakerJudgment, FuzzyJudgments, JudgmentRow,
};
pub use ranking::{
    dense_rank, IdealSolution, NormalizedScore, RankedOption, RankingTable, Separation,
    WeightedScore,
};
pub use topsis_analyzer::TopsisAnalyzer;
