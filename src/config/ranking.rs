//! Ranking configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest scale a decimal score can carry
const MAX_DECIMAL_PLACES: u32 = 28;

/// Ranking configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RankingConfig {
    /// Decimal places of the reported performance scores; `None` keeps full precision.
    /// Ranks are always assigned before rounding.
    #[serde(default)]
    pub score_decimal_places: Option<u32>,

    /// Upper bound on decision makers in one fuzzy ranking run
    #[serde(default = "default_max_decision_makers")]
    pub max_decision_makers: usize,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_decision_makers == 0 {
            return Err(ValidationError::InvalidMaxDecisionMakers);
        }
        if let Some(places) = self.score_decimal_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(ValidationError::InvalidDecimalPlaces {
                    max: MAX_DECIMAL_PLACES,
                    actual: places,
                });
            }
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            score_decimal_places: None,
            max_decision_makers: default_max_decision_makers(),
        }
    }
}

fn default_max_decision_makers() -> usize {
    5
}
