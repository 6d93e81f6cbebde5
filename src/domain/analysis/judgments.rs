//! Judgments - Fuzzy input from several decision makers and its aggregation.
//!
//! Each decision maker submits a fuzzy weight per criterion and a fuzzy
//! score per (option, criterion). Before ranking, the judgments for one
//! (option, criterion) pair are reduced to a single consensus weight and
//! score with [`CombineMode::Consensus`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{DecisionMatrix, DecisionRow};
use crate::domain::foundation::{CombineMode, Criterion, RankingError, TriangularFuzzyNumber};

/// One long-form judgment: a single decision maker's weight and score for an
/// (option, criterion) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentRow {
    #[serde(rename = "Decision Maker")]
    pub decision_maker_id: String,
    #[serde(rename = "Option")]
    pub option_id: String,
    #[serde(rename = "Criterion")]
    pub criterion_id: String,
    #[serde(rename = "Weight", default)]
    pub weight: Option<TriangularFuzzyNumber>,
    #[serde(rename = "Is Negative", default)]
    pub is_negative: Option<bool>,
    #[serde(rename = "Score", default)]
    pub score: Option<TriangularFuzzyNumber>,
}

impl JudgmentRow {
    /// Creates a fully populated judgment.
    pub fn new(
        decision_maker_id: impl Into<String>,
        option_id: impl Into<String>,
        criterion_id: impl Into<String>,
        weight: TriangularFuzzyNumber,
        is_negative: bool,
        score: TriangularFuzzyNumber,
    ) -> Self {
        Self {
            decision_maker_id: decision_maker_id.into(),
            option_id: option_id.into(),
            criterion_id: criterion_id.into(),
            weight: Some(weight),
            is_negative: Some(is_negative),
            score: Some(score),
        }
    }
}

/// Number of distinct decision makers in a set of judgments.
pub fn count_decision_makers(rows: &[JudgmentRow]) -> usize {
    rows.iter()
        .map(|r| r.decision_maker_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

struct PairJudgments {
    option_id: String,
    criterion_id: String,
    is_negative: bool,
    weights: Vec<TriangularFuzzyNumber>,
    scores: Vec<TriangularFuzzyNumber>,
}

/// Reduces multi decision-maker judgments to one consensus matrix.
///
/// Every decision maker must judge every (option, criterion) pair that
/// appears anywhere in the input; a gap is reported against the decision
/// maker who left it.
///
/// # Errors
/// - `EmptyDecisionMatrix` when `rows` is empty
/// - `EmptyIdentifier` for a blank decision maker, option or criterion
/// - `MissingScoreOrWeight` for a blank cell or an unjudged pair
/// - `DuplicateEntry` when a decision maker judges a pair twice
/// - `InconsistentCriterionDirection` when a criterion is both cost and benefit
/// - `InconsistentCriterionWeight` when the consensus weight of a criterion
///   differs between options
pub fn aggregate_judgments(
    rows: impl IntoIterator<Item = JudgmentRow>,
) -> Result<DecisionMatrix<TriangularFuzzyNumber>, RankingError> {
    let mut decision_makers: Vec<String> = Vec::new();
    let mut option_ids: Vec<String> = Vec::new();
    let mut criterion_ids: Vec<String> = Vec::new();
    let mut pairs: Vec<PairJudgments> = Vec::new();
    let mut pair_index: HashMap<(String, String), usize> = HashMap::new();
    let mut seen: HashSet<(String, String, String)> = HashSet::new();

    for row in rows {
        if row.decision_maker_id.trim().is_empty() {
            return Err(RankingError::EmptyIdentifier { field: "decision_maker" });
        }
        if row.option_id.trim().is_empty() {
            return Err(RankingError::EmptyIdentifier { field: "option" });
        }
        if row.criterion_id.trim().is_empty() {
            return Err(RankingError::EmptyIdentifier { field: "criterion" });
        }

        let (weight, score) = match (row.weight, row.score) {
            (Some(weight), Some(score)) => (weight, score),
            _ => {
                return Err(RankingError::missing_from(
                    row.option_id,
                    row.criterion_id,
                    row.decision_maker_id,
                ))
            }
        };
        let is_negative = row.is_negative.unwrap_or(false);

        let judged = (
            row.decision_maker_id.clone(),
            row.option_id.clone(),
            row.criterion_id.clone(),
        );
        if !seen.insert(judged) {
            return Err(RankingError::duplicate(
                row.option_id,
                row.criterion_id,
                Some(row.decision_maker_id),
            ));
        }

        if !decision_makers.contains(&row.decision_maker_id) {
            decision_makers.push(row.decision_maker_id.clone());
        }
        if !option_ids.contains(&row.option_id) {
            option_ids.push(row.option_id.clone());
        }
        if !criterion_ids.contains(&row.criterion_id) {
            criterion_ids.push(row.criterion_id.clone());
        }

        let key = (row.option_id.clone(), row.criterion_id.clone());
        let index = *pair_index.entry(key).or_insert_with(|| {
            pairs.push(PairJudgments {
                option_id: row.option_id.clone(),
                criterion_id: row.criterion_id.clone(),
                is_negative,
                weights: Vec::new(),
                scores: Vec::new(),
            });
            pairs.len() - 1
        });

        let pair = &mut pairs[index];
        if pair.is_negative != is_negative {
            return Err(RankingError::inconsistent_direction(row.criterion_id));
        }
        pair.weights.push(weight);
        pair.scores.push(score);
    }

    if pairs.is_empty() {
        return Err(RankingError::EmptyDecisionMatrix);
    }

    for decision_maker in &decision_makers {
        for option_id in &option_ids {
            for criterion_id in &criterion_ids {
                let judged = (decision_maker.clone(), option_id.clone(), criterion_id.clone());
                if !seen.contains(&judged) {
                    return Err(RankingError::missing_from(
                        option_id.clone(),
                        criterion_id.clone(),
                        decision_maker.clone(),
                    ));
                }
            }
        }
    }

    let mut builder = DecisionMatrix::builder();
    for pair in pairs {
        builder = builder.row(DecisionRow::new(
            pair.option_id,
            pair.criterion_id,
            TriangularFuzzyNumber::combine(&pair.weights, CombineMode::Consensus)?,
            pair.is_negative,
            TriangularFuzzyNumber::combine(&pair.scores, CombineMode::Consensus)?,
        ));
    }
    builder.build()
}

/// One decision maker's weights and scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMakerJudgment {
    pub decision_maker_id: String,
    /// Weight per criterion ID.
    #[serde(default)]
    pub weights: HashMap<String, TriangularFuzzyNumber>,
    /// Score per option ID, then criterion ID.
    #[serde(default)]
    pub scores: HashMap<String, HashMap<String, TriangularFuzzyNumber>>,
}

impl DecisionMakerJudgment {
    /// Creates a decision maker with no judgments yet.
    pub fn new(decision_maker_id: impl Into<String>) -> Self {
        Self {
            decision_maker_id: decision_maker_id.into(),
            ..Self::default()
        }
    }

    /// Sets the weight given to a criterion.
    pub fn weight(mut self, criterion_id: impl Into<String>, weight: TriangularFuzzyNumber) -> Self {
        self.weights.insert(criterion_id.into(), weight);
        self
    }

    /// Sets the score given to an option on a criterion.
    pub fn score(
        mut self,
        option_id: impl Into<String>,
        criterion_id: impl Into<String>,
        score: TriangularFuzzyNumber,
    ) -> Self {
        self.scores
            .entry(option_id.into())
            .or_default()
            .insert(criterion_id.into(), score);
        self
    }
}

/// Structured fuzzy input: shared options and criteria plus one set of
/// judgments per decision maker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyJudgments {
    pub option_ids: Vec<String>,
    pub criteria: Vec<Criterion>,
    pub decision_makers: Vec<DecisionMakerJudgment>,
}

impl FuzzyJudgments {
    /// Creates judgments over the given options and criteria.
    pub fn new(option_ids: Vec<impl Into<String>>, criteria: Vec<Criterion>) -> Self {
        Self {
            option_ids: option_ids.into_iter().map(|s| s.into()).collect(),
            criteria,
            decision_makers: Vec::new(),
        }
    }

    /// Adds a decision maker's judgments.
    pub fn with_decision_maker(mut self, judgment: DecisionMakerJudgment) -> Self {
        self.decision_makers.push(judgment);
        self
    }

    /// Returns the number of decision makers.
    pub fn decision_maker_count(&self) -> usize {
        self.decision_makers.len()
    }

    /// Joins each decision maker's scores with that decision maker's weights.
    ///
    /// Yields one row per decision maker, option and criterion, in that
    /// nesting order. Unjudged cells come out blank.
    pub fn to_rows(&self) -> Vec<JudgmentRow> {
        let mut rows = Vec::with_capacity(
            self.decision_makers.len() * self.option_ids.len() * self.criteria.len(),
        );

        for judgment in &self.decision_makers {
            for option_id in &self.option_ids {
                let option_scores = judgment.scores.get(option_id);
                for criterion in &self.criteria {
                    rows.push(JudgmentRow {
                        decision_maker_id: judgment.decision_maker_id.clone(),
                        option_id: option_id.clone(),
                        criterion_id: criterion.id.clone(),
                        weight: judgment.weights.get(&criterion.id).copied(),
                        is_negative: Some(criterion.is_negative),
                        score: option_scores.and_then(|s| s.get(&criterion.id)).copied(),
                    });
                }
            }
        }

        rows
    }

    /// Aggregates all decision makers into one consensus matrix.
    ///
    /// # Errors
    /// `EmptyCombineSet` when there are options and criteria but no decision
    /// makers, otherwise as [`aggregate_judgments`].
    pub fn aggregate(&self) -> Result<DecisionMatrix<TriangularFuzzyNumber>, RankingError> {
        if self.decision_makers.is_empty() && !self.option_ids.is_empty() && !self.criteria.is_empty() {
            return Err(RankingError::EmptyCombineSet);
        }
        aggregate_judgments(self.to_rows())
    }
}
