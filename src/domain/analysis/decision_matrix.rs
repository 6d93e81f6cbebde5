//! Decision Matrix - Long-form option x criterion table consumed by the rankers.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{Criterion, RankingError};

/// One row of the boundary input table.
///
/// Weight and score are optional because the editing surface may leave cells
/// blank; a blank cell is rejected when the matrix is built. A blank
/// `Is Negative` cell means a benefit criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRow<V> {
    #[serde(rename = "Option")]
    pub option_id: String,
    #[serde(rename = "Criterion")]
    pub criterion_id: String,
    #[serde(rename = "Weight", default)]
    pub weight: Option<V>,
    #[serde(rename = "Is Negative", default)]
    pub is_negative: Option<bool>,
    #[serde(rename = "Score", default)]
    pub score: Option<V>,
}

impl<V> DecisionRow<V> {
    /// Creates a fully populated row.
    pub fn new(
        option_id: impl Into<String>,
        criterion_id: impl Into<String>,
        weight: V,
        is_negative: bool,
        score: V,
    ) -> Self {
        Self {
            option_id: option_id.into(),
            criterion_id: criterion_id.into(),
            weight: Some(weight),
            is_negative: Some(is_negative),
            score: Some(score),
        }
    }
}

/// A validated cell of the decision matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixEntry<V> {
    pub option_id: String,
    pub criterion_id: String,
    pub is_negative: bool,
    pub weight: V,
    pub score: V,
}

/// The assembled decision matrix.
///
/// Every option has exactly one entry per criterion, and each criterion has a
/// single direction across all options. Options and criteria keep the order
/// in which they first appeared in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix<V> {
    option_ids: Vec<String>,
    criteria: Vec<Criterion>,
    entries: Vec<MatrixEntry<V>>,
    index: HashMap<(String, String), usize>,
}

impl<V: Clone + PartialEq> DecisionMatrix<V> {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder<V> {
        DecisionMatrixBuilder::new()
    }

    /// Validates boundary rows into a matrix.
    pub fn from_rows(rows: impl IntoIterator<Item = DecisionRow<V>>) -> Result<Self, RankingError> {
        Self::builder().rows(rows).build()
    }

    /// Ordered option IDs.
    pub fn option_ids(&self) -> &[String] {
        &self.option_ids
    }

    /// Ordered criteria.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// All entries in input order.
    pub fn entries(&self) -> &[MatrixEntry<V>] {
        &self.entries
    }

    /// Gets the entry for an option and criterion.
    pub fn get(&self, option_id: &str, criterion_id: &str) -> Option<&MatrixEntry<V>> {
        self.index
            .get(&(option_id.to_string(), criterion_id.to_string()))
            .map(|&i| &self.entries[i])
    }

    /// Entries scored against one criterion, one per option.
    pub fn entries_for_criterion<'a>(
        &'a self,
        criterion_id: &'a str,
    ) -> impl Iterator<Item = &'a MatrixEntry<V>> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.criterion_id == criterion_id)
    }

    /// Returns the number of options.
    pub fn option_count(&self) -> usize {
        self.option_ids.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug)]
pub struct DecisionMatrixBuilder<V> {
    rows: Vec<DecisionRow<V>>,
}

impl<V> Default for DecisionMatrixBuilder<V> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<V: Clone + PartialEq> DecisionMatrixBuilder<V> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a boundary row.
    pub fn row(mut self, row: DecisionRow<V>) -> Self {
        self.rows.push(row);
        self
    }

    /// Adds several boundary rows.
    pub fn rows(mut self, rows: impl IntoIterator<Item = DecisionRow<V>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Adds a fully populated entry.
    pub fn entry(
        self,
        option_id: impl Into<String>,
        criterion_id: impl Into<String>,
        is_negative: bool,
        weight: V,
        score: V,
    ) -> Self {
        self.row(DecisionRow::new(option_id, criterion_id, weight, is_negative, score))
    }

    /// Validates the rows and builds the matrix.
    ///
    /// # Errors
    /// - `EmptyDecisionMatrix` when no rows were added
    /// - `EmptyIdentifier` for a blank option or criterion
    /// - `MissingScoreOrWeight` for a blank cell or an absent option/criterion pair
    /// - `DuplicateEntry` when a pair appears twice
    /// - `InconsistentCriterionDirection` when a criterion is both cost and benefit
    /// - `InconsistentCriterionWeight` when a criterion's weight differs between options
    pub fn build(self) -> Result<DecisionMatrix<V>, RankingError> {
        if self.rows.is_empty() {
            return Err(RankingError::EmptyDecisionMatrix);
        }

        let mut option_ids = Vec::new();
        let mut known_options = HashSet::new();
        let mut criteria: Vec<Criterion> = Vec::new();
        let mut directions: HashMap<String, bool> = HashMap::new();
        let mut weights: HashMap<String, V> = HashMap::new();
        let mut entries = Vec::with_capacity(self.rows.len());
        let mut index = HashMap::with_capacity(self.rows.len());

        for row in self.rows {
            if row.option_id.trim().is_empty() {
                return Err(RankingError::EmptyIdentifier { field: "option" });
            }
            if row.criterion_id.trim().is_empty() {
                return Err(RankingError::EmptyIdentifier { field: "criterion" });
            }

            let (weight, score) = match (row.weight, row.score) {
                (Some(weight), Some(score)) => (weight, score),
                _ => return Err(RankingError::missing(row.option_id, row.criterion_id)),
            };
            let is_negative = row.is_negative.unwrap_or(false);

            match directions.get(&row.criterion_id) {
                Some(&known) if known != is_negative => {
                    return Err(RankingError::inconsistent_direction(row.criterion_id));
                }
                Some(_) => {}
                None => {
                    directions.insert(row.criterion_id.clone(), is_negative);
                    criteria.push(Criterion::new(row.criterion_id.clone(), is_negative));
                }
            }

            match weights.get(&row.criterion_id) {
                Some(known) if *known != weight => {
                    return Err(RankingError::inconsistent_weight(row.criterion_id, row.option_id));
                }
                Some(_) => {}
                None => {
                    weights.insert(row.criterion_id.clone(), weight.clone());
                }
            }

            if known_options.insert(row.option_id.clone()) {
                option_ids.push(row.option_id.clone());
            }

            let key = (row.option_id.clone(), row.criterion_id.clone());
            if index.contains_key(&key) {
                return Err(RankingError::duplicate(row.option_id, row.criterion_id, None));
            }
            index.insert(key, entries.len());
            entries.push(MatrixEntry {
                option_id: row.option_id,
                criterion_id: row.criterion_id,
                is_negative,
                weight,
                score,
            });
        }

        for option_id in &option_ids {
            for criterion in &criteria {
                if !index.contains_key(&(option_id.clone(), criterion.id.clone())) {
                    return Err(RankingError::missing(option_id.clone(), criterion.id.clone()));
                }
            }
        }

        Ok(DecisionMatrix {
            option_ids,
            criteria,
            entries,
            index,
        })
    }
}
