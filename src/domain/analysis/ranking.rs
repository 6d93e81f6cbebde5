//! Ranking - Shared pipeline types, result table and dense ranking for both
//! TOPSIS variants.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RankingError;

/// A score after dividing by its criterion's normalization factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedScore<V> {
    pub option_id: String,
    pub criterion_id: String,
    pub is_negative: bool,
    pub weight: V,
    pub normalized: V,
}

/// A normalized score multiplied by its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedScore<V> {
    pub option_id: String,
    pub criterion_id: String,
    pub is_negative: bool,
    pub weighted: V,
}

/// Ideal-best and ideal-worst reference values for one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdealSolution<V> {
    pub best: V,
    pub worst: V,
}

/// Distances of one option from the ideal-best and ideal-worst points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separation {
    pub option_id: String,
    pub distance_best: Decimal,
    pub distance_worst: Decimal,
}

impl Separation {
    /// Closeness to the ideal solution: `worst / (best + worst)`.
    ///
    /// # Errors
    /// `IndistinguishableOptions` when both distances are zero, which only
    /// happens when every criterion has identical ideal-best and ideal-worst
    /// points.
    pub fn closeness(&self) -> Result<Decimal, RankingError> {
        let total = self
            .distance_best
            .checked_add(self.distance_worst)
            .ok_or(RankingError::ArithmeticOverflow { operation: "closeness" })?;
        if total.is_zero() {
            return Err(RankingError::IndistinguishableOptions);
        }
        self.distance_worst
            .checked_div(total)
            .ok_or(RankingError::ArithmeticOverflow { operation: "closeness" })
    }
}

/// One row of the boundary output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOption {
    #[serde(rename = "Option")]
    pub option_id: String,
    #[serde(rename = "Performance Score")]
    pub performance_score: Decimal,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

/// Output of a ranking run: one row per option, in option order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingTable {
    rows: Vec<RankedOption>,
}

impl RankingTable {
    /// Builds the table from per-option scores, assigning dense descending ranks.
    pub fn from_scores(scores: Vec<(String, Decimal)>) -> Self {
        let values: Vec<Decimal> = scores.iter().map(|(_, score)| *score).collect();
        let ranks = dense_rank(&values);

        let rows = scores
            .into_iter()
            .zip(ranks)
            .map(|((option_id, performance_score), rank)| RankedOption {
                option_id,
                performance_score,
                rank,
            })
            .collect();

        Self { rows }
    }

    /// Rows in option order.
    pub fn rows(&self) -> &[RankedOption] {
        &self.rows
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<RankedOption> {
        self.rows
    }

    /// Returns the number of ranked options.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Gets the row for an option.
    pub fn get(&self, option_id: &str) -> Option<&RankedOption> {
        self.rows.iter().find(|r| r.option_id == option_id)
    }

    /// All options sharing rank 1.
    pub fn best(&self) -> Vec<&RankedOption> {
        self.rows.iter().filter(|r| r.rank == 1).collect()
    }

    /// Rows ordered by rank; ties keep option order.
    pub fn sorted_by_rank(&self) -> Vec<&RankedOption> {
        let mut sorted: Vec<_> = self.rows.iter().collect();
        sorted.sort_by_key(|r| r.rank);
        sorted
    }

    /// Copy of the table with scores rounded for presentation, halves away
    /// from zero (0.125 becomes 0.13). Ranks are kept as computed on the
    /// full-precision scores.
    pub fn rounded(&self, decimal_places: u32) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|r| RankedOption {
                performance_score: r
                    .performance_score
                    .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero),
                ..r.clone()
            })
            .collect();
        Self { rows }
    }
}

pub(crate) fn checked_sum(
    values: impl IntoIterator<Item = Decimal>,
    operation: &'static str,
) -> Result<Decimal, RankingError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or(RankingError::ArithmeticOverflow { operation })
}

pub(crate) fn checked_square(value: Decimal, operation: &'static str) -> Result<Decimal, RankingError> {
    value
        .checked_mul(value)
        .ok_or(RankingError::ArithmeticOverflow { operation })
}

pub(crate) fn checked_sqrt(value: Decimal, operation: &'static str) -> Result<Decimal, RankingError> {
    value
        .sqrt()
        .ok_or(RankingError::ArithmeticOverflow { operation })
}

/// Dense descending rank: the highest score gets 1, equal scores share a
/// rank, and the next distinct score gets the next integer.
pub fn dense_rank(scores: &[Decimal]) -> Vec<u32> {
    let mut distinct: Vec<Decimal> = scores.to_vec();
    distinct.sort_by(|a, b| b.cmp(a));
    distinct.dedup();

    scores
        .iter()
        .map(|score| {
            let position = distinct
                .iter()
                .position(|d| d == score)
                .unwrap_or(distinct.len());
            position as u32 + 1
        })
        .collect()
}
