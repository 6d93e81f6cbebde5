//! TOPSIS Analyzer - Crisp ranking by similarity to the ideal solution.

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::ranking::{checked_sqrt, checked_square, checked_sum};
use super::{DecisionMatrix, IdealSolution, NormalizedScore, RankingTable, Separation, WeightedScore};
use crate::domain::foundation::RankingError;

/// Crisp TOPSIS pipeline.
///
/// Stages run strictly in order: normalize, weight, ideal points, distances,
/// score and rank. Each stage is exposed so intermediate tables can be
/// inspected.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Runs the full pipeline and returns one ranked row per option.
    pub fn rank(matrix: &DecisionMatrix<Decimal>) -> Result<RankingTable, RankingError> {
        let factors = Self::normalization_factors(matrix)?;
        let normalized = Self::normalize(matrix, &factors)?;
        let weighted = Self::weight(&normalized)?;
        let ideals = Self::ideal_solutions(matrix, &weighted)?;
        let separations = Self::separations(matrix, &weighted, &ideals)?;
        Self::performance_scores(&separations)
    }

    /// Vector norm of each criterion: `sqrt(sum of squared scores)`.
    ///
    /// # Errors
    /// `DegenerateCriterion` if every score of a criterion is zero.
    pub fn normalization_factors(
        matrix: &DecisionMatrix<Decimal>,
    ) -> Result<HashMap<String, Decimal>, RankingError> {
        let mut factors = HashMap::with_capacity(matrix.criterion_count());

        for criterion in matrix.criteria() {
            let squares = matrix
                .entries_for_criterion(&criterion.id)
                .map(|e| checked_square(e.score, "normalize"))
                .collect::<Result<Vec<_>, _>>()?;
            let factor = checked_sqrt(checked_sum(squares, "normalize")?, "normalize")?;

            if factor.is_zero() {
                return Err(RankingError::degenerate(criterion.id.clone()));
            }
            factors.insert(criterion.id.clone(), factor);
        }

        Ok(factors)
    }

    /// Divides every score by its criterion's normalization factor.
    pub fn normalize(
        matrix: &DecisionMatrix<Decimal>,
        factors: &HashMap<String, Decimal>,
    ) -> Result<Vec<NormalizedScore<Decimal>>, RankingError> {
        matrix
            .entries()
            .iter()
            .map(|entry| {
                let factor = factors
                    .get(&entry.criterion_id)
                    .ok_or_else(|| RankingError::degenerate(entry.criterion_id.clone()))?;
                let normalized = entry
                    .score
                    .checked_div(*factor)
                    .ok_or(RankingError::ArithmeticOverflow { operation: "normalize" })?;

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

    /// Multiplies each normalized score by its weight.
    pub fn weight(
        normalized: &[NormalizedScore<Decimal>],
    ) -> Result<Vec<WeightedScore<Decimal>>, RankingError> {
        normalized
            .iter()
            .map(|n| {
                let weighted = n
                    .normalized
                    .checked_mul(n.weight)
                    .ok_or(RankingError::ArithmeticOverflow { operation: "weight" })?;
                Ok(WeightedScore {
                    option_id: n.option_id.clone(),
                    criterion_id: n.criterion_id.clone(),
                    is_negative: n.is_negative,
                    weighted,
                })
            })
            .collect()
    }

    /// Ideal-best and ideal-worst per criterion.
    ///
    /// Benefit criteria take the maximum as best and the minimum as worst;
    /// cost criteria invert the roles.
    pub fn ideal_solutions(
        matrix: &DecisionMatrix<Decimal>,
        weighted: &[WeightedScore<Decimal>],
    ) -> Result<HashMap<String, IdealSolution<Decimal>>, RankingError> {
        let mut ideals = HashMap::with_capacity(matrix.criterion_count());

        for criterion in matrix.criteria() {
            let values = weighted
                .iter()
                .filter(|w| w.criterion_id == criterion.id)
                .map(|w| w.weighted);
            let max = values.clone().max().ok_or(RankingError::EmptyDecisionMatrix)?;
            let min = values.min().ok_or(RankingError::EmptyDecisionMatrix)?;

            let ideal = if criterion.is_cost() {
                IdealSolution { best: min, worst: max }
            } else {
                IdealSolution { best: max, worst: min }
            };
            ideals.insert(criterion.id.clone(), ideal);
        }

        Ok(ideals)
    }

    /// Euclidean distance of each option from the ideal-best and ideal-worst points.
    pub fn separations(
        matrix: &DecisionMatrix<Decimal>,
        weighted: &[WeightedScore<Decimal>],
        ideals: &HashMap<String, IdealSolution<Decimal>>,
    ) -> Result<Vec<Separation>, RankingError> {
        let mut partials: HashMap<&str, (Decimal, Decimal)> = HashMap::new();

        for w in weighted {
            let ideal = ideals
                .get(&w.criterion_id)
                .ok_or_else(|| RankingError::degenerate(w.criterion_id.clone()))?;
            let to_best = checked_square(w.weighted - ideal.best, "separation")?;
            let to_worst = checked_square(w.weighted - ideal.worst, "separation")?;

            let (best, worst) = partials.entry(w.option_id.as_str()).or_default();
            *best = checked_sum([*best, to_best], "separation")?;
            *worst = checked_sum([*worst, to_worst], "separation")?;
        }

        matrix
            .option_ids()
            .iter()
            .map(|option_id| {
                let (best, worst) = partials
                    .get(option_id.as_str())
                    .copied()
                    .unwrap_or_default();
                Ok(Separation {
                    option_id: option_id.clone(),
                    distance_best: checked_sqrt(best, "separation")?,
                    distance_worst: checked_sqrt(worst, "separation")?,
                })
            })
            .collect()
    }

    /// Performance score `worst / (best + worst)` with dense descending rank.
    pub fn performance_scores(separations: &[Separation]) -> Result<RankingTable, RankingError> {
        let scores = separations
            .iter()
            .map(|s| Ok((s.option_id.clone(), s.closeness()?)))
            .collect::<Result<Vec<_>, RankingError>>()?;

        Ok(RankingTable::from_scores(scores))
    }
}
