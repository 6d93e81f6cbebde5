//! Fuzzy TOPSIS Analyzer - Ranking over triangular fuzzy scores and weights.
//!
//! Runs the same stage sequence as [`TopsisAnalyzer`](super::TopsisAnalyzer),
//! but every score and weight is a [`TriangularFuzzyNumber`]. Direction is
//! handled during normalization (cost scores are inverted there), so the
//! ideal points are plain componentwise extremes for every criterion.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::ranking::checked_sum;
use super::{DecisionMatrix, IdealSolution, NormalizedScore, RankingTable, Separation, WeightedScore};
use crate::domain::foundation::{CombineMode, RankingError, TriangularFuzzyNumber};

/// Fuzzy TOPSIS pipeline over an aggregated decision matrix.
///
/// Decision makers must already be combined into one fuzzy weight and score
/// per (option, criterion); see [`aggregate_judgments`](super::aggregate_judgments).
pub struct FuzzyTopsisAnalyzer;

impl FuzzyTopsisAnalyzer {
    /// Runs the full pipeline and returns one ranked row per option.
    pub fn rank(matrix: &DecisionMatrix<TriangularFuzzyNumber>) -> Result<RankingTable, RankingError> {
        let factors = Self::normalization_factors(matrix)?;
        let normalized = Self::normalize(matrix, &factors)?;
        let weighted = Self::weight(&normalized)?;
        let ideals = Self::ideal_solutions(matrix, &weighted)?;
        let separations = Self::separations(matrix, &weighted, &ideals)?;
        Self::performance_scores(&separations)
    }

    /// Largest upper bound `c` for benefit criteria, smallest lower bound `a`
    /// for cost criteria.
    ///
    /// # Errors
    /// `DegenerateCriterion` if the factor is zero.
    pub fn normalization_factors(
        matrix: &DecisionMatrix<TriangularFuzzyNumber>,
    ) -> Result<HashMap<String, Decimal>, RankingError> {
        let mut factors = HashMap::with_capacity(matrix.criterion_count());

        for criterion in matrix.criteria() {
            let scores = matrix.entries_for_criterion(&criterion.id).map(|e| e.score);
            let extreme = if criterion.is_cost() {
                scores.map(|s| s.a()).min()
            } else {
                scores.map(|s| s.c()).max()
            };
            let factor = extreme.ok_or(RankingError::EmptyDecisionMatrix)?;

            if factor.is_zero() {
                return Err(RankingError::degenerate(criterion.id.clone()));
            }
            factors.insert(criterion.id.clone(), factor);
        }

        Ok(factors)
    }

    /// Benefit scores are divided by the factor. Cost scores go through the
    /// reciprocal and are then scaled by the factor, which keeps the bounds
    /// ordered.
    pub fn normalize(
        matrix: &DecisionMatrix<TriangularFuzzyNumber>,
        factors: &HashMap<String, Decimal>,
    ) -> Result<Vec<NormalizedScore<TriangularFuzzyNumber>>, RankingError> {
        matrix
            .entries()
            .iter()
            .map(|entry| {
                let factor = *factors
                    .get(&entry.criterion_id)
                    .ok_or_else(|| RankingError::degenerate(entry.criterion_id.clone()))?;

                let normalized = if entry.is_negative {
                    entry.score.power(dec!(-1))?.multiply(factor)?
                } else {
                    entry.score.divide(factor)?
                };

                Ok(NormalizedScore {
                    option_id: entry.option_id.clone(),
                    criterion_id: entry.criterion_id.clone(),
                    is_negative: entry.is_negative,
                    weight: entry.weight,
                    normalized,
                })
            })
            .collect()
    }

    /// Componentwise product of each normalized score and its weight.
    pub fn weight(
        normalized: &[NormalizedScore<TriangularFuzzyNumber>],
    ) -> Result<Vec<WeightedScore<TriangularFuzzyNumber>>, RankingError> {
        normalized
            .iter()
            .map(|n| {
                Ok(WeightedScore {
                    option_id: n.option_id.clone(),
                    criterion_id: n.criterion_id.clone(),
                    is_negative: n.is_negative,
                    weighted: n.normalized.multiply(n.weight)?,
                })
            })
            .collect()
    }

    /// Componentwise maximum (best) and minimum (worst) per criterion.
    pub fn ideal_solutions(
        matrix: &DecisionMatrix<TriangularFuzzyNumber>,
        weighted: &[WeightedScore<TriangularFuzzyNumber>],
    ) -> Result<HashMap<String, IdealSolution<TriangularFuzzyNumber>>, RankingError> {
        let mut ideals = HashMap::with_capacity(matrix.criterion_count());

        for criterion in matrix.criteria() {
            let values: Vec<TriangularFuzzyNumber> = weighted
                .iter()
                .filter(|w| w.criterion_id == criterion.id)
                .map(|w| w.weighted)
                .collect();

            let ideal = IdealSolution {
                best: TriangularFuzzyNumber::combine(&values, CombineMode::Max)?,
                worst: TriangularFuzzyNumber::combine(&values, CombineMode::Min)?,
            };
            ideals.insert(criterion.id.clone(), ideal);
        }

        Ok(ideals)
    }

    /// Sum over criteria of the fuzzy distance to each ideal point.
    pub fn separations(
        matrix: &DecisionMatrix<TriangularFuzzyNumber>,
        weighted: &[WeightedScore<TriangularFuzzyNumber>],
        ideals: &HashMap<String, IdealSolution<TriangularFuzzyNumber>>,
    ) -> Result<Vec<Separation>, RankingError> {
        let mut totals: HashMap<&str, (Decimal, Decimal)> = HashMap::new();

        for w in weighted {
            let ideal = ideals
                .get(&w.criterion_id)
                .ok_or_else(|| RankingError::degenerate(w.criterion_id.clone()))?;
            let to_best = TriangularFuzzyNumber::euclidean_distance(&w.weighted, &ideal.best)?;
            let to_worst = TriangularFuzzyNumber::euclidean_distance(&w.weighted, &ideal.worst)?;

            let (best, worst) = totals.entry(w.option_id.as_str()).or_default();
            *best = checked_sum([*best, to_best], "separation")?;
            *worst = checked_sum([*worst, to_worst], "separation")?;
        }

        Ok(matrix
            .option_ids()
            .iter()
            .map(|option_id| {
                let (distance_best, distance_worst) = totals
                    .get(option_id.as_str())
                    .copied()
                    .unwrap_or_default();
                Separation {
                    option_id: option_id.clone(),
                    distance_best,
                    distance_worst,
                }
            })
            .collect())
    }

    /// Closeness coefficient `worst / (worst + best)` with dense descending rank.
    pub fn performance_scores(separations: &[Separation]) -> Result<RankingTable, RankingError> {
        let scores = separations
            .iter()
            .map(|s| Ok((s.option_id.clone(), s.closeness()?)))
            .collect::<Result<Vec<_>, RankingError>>()?;

        Ok(RankingTable::from_scores(scores))
    }
}
