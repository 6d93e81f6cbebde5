//! CalculateFuzzyTopsisHandler - Command handler for fuzzy TOPSIS rankings.

use tracing::{debug, info, warn};

use crate::config::RankingConfig;
use crate::domain::analysis::{
    aggregate_judgments, count_decision_makers, FuzzyJudgments, FuzzyTopsisAnalyzer, JudgmentRow,
    RankingTable,
};
use crate::domain::foundation::RankingError;

/// Input shapes accepted for a fuzzy ranking.
#[derive(Debug, Clone)]
pub enum FuzzyTopsisInput {
    /// Long-form judgments, one per (decision maker, option, criterion).
    Rows(Vec<JudgmentRow>),
    /// Per decision-maker weights and scores.
    Judgments(FuzzyJudgments),
}

impl FuzzyTopsisInput {
    fn decision_maker_count(&self) -> usize {
        match self {
            FuzzyTopsisInput::Rows(rows) => count_decision_makers(rows),
            FuzzyTopsisInput::Judgments(judgments) => judgments.decision_maker_count(),
        }
    }
}

/// Command to rank options with fuzzy TOPSIS.
#[derive(Debug, Clone)]
pub struct CalculateFuzzyTopsisCommand {
    pub input: FuzzyTopsisInput,
}

impl CalculateFuzzyTopsisCommand {
    /// Ranks long-form judgments.
    pub fn from_rows(rows: Vec<JudgmentRow>) -> Self {
        Self {
            input: FuzzyTopsisInput::Rows(rows),
        }
    }

    /// Ranks structured per decision-maker judgments.
    pub fn from_judgments(judgments: FuzzyJudgments) -> Self {
        Self {
            input: FuzzyTopsisInput::Judgments(judgments),
        }
    }
}

/// Result of a successful fuzzy ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateFuzzyTopsisResult {
    pub ranking: RankingTable,
    pub option_count: usize,
    pub criterion_count: usize,
    pub decision_maker_count: usize,
}

/// Handler for fuzzy TOPSIS rankings.
pub struct CalculateFuzzyTopsisHandler {
    config: RankingConfig,
}

impl CalculateFuzzyTopsisHandler {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn handle(
        &self,
        cmd: CalculateFuzzyTopsisCommand,
    ) -> Result<CalculateFuzzyTopsisResult, RankingError> {
        // 1. Enforce the decision-maker limit
        let decision_maker_count = cmd.input.decision_maker_count();
        if decision_maker_count > self.config.max_decision_makers {
            warn!(
                decision_makers = decision_maker_count,
                max = self.config.max_decision_makers,
                "Rejected fuzzy TOPSIS input"
            );
            return Err(RankingError::TooManyDecisionMakers {
                max: self.config.max_decision_makers,
                actual: decision_maker_count,
            });
        }

        // 2. Combine decision makers into one consensus matrix
        let matrix = match cmd.input {
            FuzzyTopsisInput::Rows(rows) => aggregate_judgments(rows),
            FuzzyTopsisInput::Judgments(judgments) => judgments.aggregate(),
        }
        .map_err(|e| {
            warn!(error = %e, code = %e.code(), "Rejected fuzzy TOPSIS input");
            e
        })?;

        info!(
            options = matrix.option_count(),
            criteria = matrix.criterion_count(),
            decision_makers = decision_maker_count,
            "Calculating fuzzy TOPSIS ranking"
        );

        for entry in matrix.entries() {
            debug!(
                option = %entry.option_id,
                criterion = %entry.criterion_id,
                weight = %entry.weight,
                score = %entry.score,
                "Consensus judgment"
            );
        }

        // 3. Rank on full precision
        let ranking = FuzzyTopsisAnalyzer::rank(&matrix).map_err(|e| {
            warn!(error = %e, code = %e.code(), "Fuzzy TOPSIS ranking failed");
            e
        })?;

        // 4. Round for presentation
        let ranking = match self.config.score_decimal_places {
            Some(places) => ranking.rounded(places),
            None => ranking,
        };

        let best: Vec<&str> = ranking.best().iter().map(|r| r.option_id.as_str()).collect();
        info!(best = ?best, "Fuzzy TOPSIS ranking complete");

        Ok(CalculateFuzzyTopsisResult {
            ranking,
            option_count: matrix.option_count(),
            criterion_count: matrix.criterion_count(),
            decision_maker_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::DecisionMakerJudgment;
    use crate::domain::foundation::{Criterion, TriangularFuzzyNumber};

    fn tfn(text: &str) -> TriangularFuzzyNumber {
        text.parse().unwrap()
    }

    fn expert(id: &str, quality: &str) -> DecisionMakerJudgment {
        DecisionMakerJudgment::new(id)
            .weight("Quality", tfn("5,7,9"))
            .weight("Cost", tfn("3,5,7"))
            .score("S1", "Quality", tfn(quality))
            .score("S1", "Cost", tfn("3,5,7"))
            .score("S2", "Quality", tfn("1,3,5"))
            .score("S2", "Cost", tfn("1,3,5"))
    }

    fn suppliers(experts: usize) -> FuzzyJudgments {
        let mut judgments = FuzzyJudgments::new(
            vec!["S1", "S2"],
            vec![Criterion::benefit("Quality"), Criterion::cost("Cost")],
        );
        for i in 0..experts {
            let quality = if i % 2 == 0 { "5,7,9" } else { "3,7,9" };
            judgments = judgments.with_decision_maker(expert(&format!("DM{}", i + 1), quality));
        }
        judgments
    }

    #[test]
    fn ranks_structured_judgments() {
        let handler = CalculateFuzzyTopsisHandler::new(RankingConfig::default());
        let result = handler
            .handle(CalculateFuzzyTopsisCommand::from_judgments(suppliers(2)))
            .unwrap();

        assert_eq!(result.decision_maker_count, 2);
        assert_eq!(result.option_count, 2);
        assert_eq!(result.criterion_count, 2);
        assert_eq!(result.ranking.len(), 2);
    }

    #[test]
    fn rows_and_judgments_rank_identically() {
        let handler = CalculateFuzzyTopsisHandler::new(RankingConfig::default());
        let from_judgments = handler
            .handle(CalculateFuzzyTopsisCommand::from_judgments(suppliers(3)))
            .unwrap();
        let from_rows = handler
            .handle(CalculateFuzzyTopsisCommand::from_rows(suppliers(3).to_rows()))
            .unwrap();

        assert_eq!(from_judgments, from_rows);
    }

    #[test]
    fn too_many_decision_makers_rejected() {
        let handler = CalculateFuzzyTopsisHandler::new(RankingConfig {
            max_decision_makers: 2,
            ..Default::default()
        });
        let result = handler.handle(CalculateFuzzyTopsisCommand::from_judgments(suppliers(3)));

        assert_eq!(
            result,
            Err(RankingError::TooManyDecisionMakers { max: 2, actual: 3 })
        );
    }

    #[test]
    fn rounding_applies_after_ranking() {
        let handler = CalculateFuzzyTopsisHandler::new(RankingConfig {
            score_decimal_places: Some(3),
            ..Default::default()
        });
        let result = handler
            .handle(CalculateFuzzyTopsisCommand::from_judgments(suppliers(1)))
            .unwrap();

        for row in result.ranking.rows() {
            assert!(row.performance_score.scale() <= 3);
        }
    }

    #[test]
    fn incomplete_judgments_rejected() {
        let mut judgments = suppliers(2);
        judgments.decision_makers[0]
            .scores
            .get_mut("S2")
            .unwrap()
            .remove("Cost");

        let handler = CalculateFuzzyTopsisHandler::new(RankingConfig::default());
        let result = handler.handle(CalculateFuzzyTopsisCommand::from_judgments(judgments));

        assert_eq!(result, Err(RankingError::missing_from("S2", "Cost", "DM1")));
    }
}
