//! Criteria Scores Table - Wide crisp input, one row per criterion.
//!
//! This is the shape a spreadsheet-style editor produces: each row carries a
//! criterion's weight and direction followed by one score column per option.
//! [`CriteriaScoresTable::melt`] turns it into the long form the rankers read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DecisionMatrix, DecisionRow};
use crate::domain::foundation::RankingError;

/// One criterion row of the wide table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRow {
    pub criterion_id: String,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub is_negative: Option<bool>,
    /// Score cells keyed by option ID. An absent key is a blank cell.
    #[serde(default)]
    pub scores: HashMap<String, Decimal>,
}

impl CriterionRow {
    /// Creates a row with a weight and direction and no scores yet.
    pub fn new(criterion_id: impl Into<String>, weight: Decimal, is_negative: bool) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            weight: Some(weight),
            is_negative: Some(is_negative),
            scores: HashMap::new(),
        }
    }

    /// Sets the score cell for an option.
    pub fn with_score(mut self, option_id: impl Into<String>, score: Decimal) -> Self {
        self.scores.insert(option_id.into(), score);
        self
    }
}

/// Wide crisp decision table: options as columns, criteria as rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaScoresTable {
    /// Ordered option columns.
    pub option_ids: Vec<String>,
    /// Ordered criterion rows.
    pub criteria: Vec<CriterionRow>,
}

impl CriteriaScoresTable {
    /// Creates a builder for constructing a criteria scores table.
    pub fn builder() -> CriteriaScoresTableBuilder {
        CriteriaScoresTableBuilder::new()
    }

    /// Returns true if the table has no options or no criteria.
    pub fn is_empty(&self) -> bool {
        self.option_ids.is_empty() || self.criteria.is_empty()
    }

    /// Unpivots the option columns into long-form rows.
    ///
    /// Rows are emitted one option column at a time, each column walking the
    /// criteria in table order. Blank cells stay blank; they are rejected
    /// when the matrix is built.
    pub fn melt(&self) -> Vec<DecisionRow<Decimal>> {
        self.option_ids
            .iter()
            .flat_map(|option_id| {
                self.criteria.iter().map(move |row| DecisionRow {
                    option_id: option_id.clone(),
                    criterion_id: row.criterion_id.clone(),
                    weight: row.weight,
                    is_negative: row.is_negative,
                    score: row.scores.get(option_id).copied(),
                })
            })
            .collect()
    }

    /// Melts the table and validates it into a decision matrix.
    ///
    /// # Errors
    /// `MissingScoreOrWeight` for any blank weight or score cell, plus every
    /// error [`DecisionMatrixBuilder::build`](super::DecisionMatrixBuilder::build)
    /// can raise.
    pub fn into_matrix(self) -> Result<DecisionMatrix<Decimal>, RankingError> {
        DecisionMatrix::from_rows(self.melt())
    }
}

/// Builder for constructing CriteriaScoresTable instances.
///
/// Positional scores passed to [`criterion`](Self::criterion) are matched to
/// the option columns in [`build`](Self::build), so `options` may be set
/// before or after the criteria.
#[derive(Debug, Default)]
pub struct CriteriaScoresTableBuilder {
    option_ids: Vec<String>,
    criteria: Vec<(CriterionRow, Option<Vec<Decimal>>)>,
}

impl CriteriaScoresTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the option columns.
    pub fn options(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.option_ids = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a criterion row with one score per option, in option order.
    pub fn criterion(
        mut self,
        criterion_id: impl Into<String>,
        weight: Decimal,
        is_negative: bool,
        scores: Vec<Decimal>,
    ) -> Self {
        let row = CriterionRow::new(criterion_id, weight, is_negative);
        self.criteria.push((row, Some(scores)));
        self
    }

    /// Adds a prepared criterion row.
    pub fn row(mut self, row: CriterionRow) -> Self {
        self.criteria.push((row, None));
        self
    }

    /// Builds the criteria scores table.
    ///
    /// # Errors
    /// `InvalidFormat` when a positional score list does not have exactly one
    /// score per option.
    pub fn build(self) -> Result<CriteriaScoresTable, RankingError> {
        let option_ids = self.option_ids;
        let criteria = self
            .criteria
            .into_iter()
            .map(|(mut row, scores)| {
                if let Some(scores) = scores {
                    if scores.len() != option_ids.len() {
                        return Err(RankingError::invalid_format(
                            "scores",
                            format!(
                                "criterion '{}' has {} scores for {} options",
                                row.criterion_id,
                                scores.len(),
                                option_ids.len()
                            ),
                        ));
                    }
                    row.scores = option_ids.iter().cloned().zip(scores).collect();
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CriteriaScoresTable {
            option_ids,
            criteria,
        })
    }
}
