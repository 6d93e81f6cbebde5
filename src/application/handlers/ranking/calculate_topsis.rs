//! CalculateTopsisHandler - Command handler for crisp TOPSIS rankings.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::RankingConfig;
use crate::domain::analysis::{CriteriaScoresTable, DecisionMatrix, DecisionRow, RankingTable, TopsisAnalyzer};
use crate::domain::foundation::RankingError;

/// Input shapes accepted for a crisp ranking.
#[derive(Debug, Clone)]
pub enum TopsisInput {
    /// Long-form rows, one per (option, criterion).
    Rows(Vec<DecisionRow<Decimal>>),
    /// Wide table, one row per criterion with a score column per option.
    Table(CriteriaScoresTable),
}

/// Command to rank options with crisp TOPSIS.
#[derive(Debug, Clone)]
pub struct CalculateTopsisCommand {
    pub input: TopsisInput,
}

impl CalculateTopsisCommand {
    /// Ranks long-form rows.
    pub fn from_rows(rows: Vec<DecisionRow<Decimal>>) -> Self {
        Self {
            input: TopsisInput::Rows(rows),
        }
    }

    /// Ranks a wide criteria table.
    pub fn from_table(table: CriteriaScoresTable) -> Self {
        Self {
            input: TopsisInput::Table(table),
        }
    }
}

/// Result of a successful crisp ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateTopsisResult {
    pub ranking: RankingTable,
    pub option_count: usize,
    pub criterion_count: usize,
}

/// Handler for crisp TOPSIS rankings.
pub struct CalculateTopsisHandler {
    config: RankingConfig,
}

impl CalculateTopsisHandler {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: CalculateTopsisCommand) -> Result<CalculateTopsisResult, RankingError> {
        // 1. Validate input into a matrix
        let matrix = match cmd.input {
            TopsisInput::Rows(rows) => DecisionMatrix::from_rows(rows),
            TopsisInput::Table(table) => table.into_matrix(),
        }
        .map_err(|e| {
            warn!(error = %e, code = %e.code(), "Rejected TOPSIS input");
            e
        })?;

        info!(
            options = matrix.option_count(),
            criteria = matrix.criterion_count(),
            "Calculating TOPSIS ranking"
        );

        // 2. Rank on full precision
        let ranking = TopsisAnalyzer::rank(&matrix).map_err(|e| {
            warn!(error = %e, code = %e.code(), "TOPSIS ranking failed");
            e
        })?;

        for row in ranking.rows() {
            debug!(
                option = %row.option_id,
                score = %row.performance_score,
                rank = row.rank,
                "Ranked option"
            );
        }

        // 3. Round for presentation
        let ranking = match self.config.score_decimal_places {
            Some(places) => ranking.rounded(places),
            None => ranking,
        };

        let best: Vec<&str> = ranking.best().iter().map(|r| r.option_id.as_str()).collect();
        info!(best = ?best, "TOPSIS ranking complete");

        Ok(CalculateTopsisResult {
            ranking,
            option_count: matrix.option_count(),
            criterion_count: matrix.criterion_count(),
        })
    }
}
