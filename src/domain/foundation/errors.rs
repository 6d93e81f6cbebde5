//! Error types for the ranking domain.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating inputs or computing a ranking.
///
/// Validation errors (`InvalidFuzzyNumber`, `MissingScoreOrWeight`, ...) are
/// surfaced before any pipeline stage runs. Arithmetic errors abort the whole
/// ranking run; no partial results are ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Invalid fuzzy number ({a}, {b}, {c}): {reason}")]
    InvalidFuzzyNumber {
        a: Decimal,
        b: Decimal,
        c: Decimal,
        reason: &'static str,
    },

    #[error("Cannot combine an empty set of fuzzy numbers")]
    EmptyCombineSet,

    #[error("Missing weight or score for option '{option_id}' on criterion '{criterion_id}'{}", decision_maker_suffix(.decision_maker_id))]
    MissingScoreOrWeight {
        option_id: String,
        criterion_id: String,
        decision_maker_id: Option<String>,
    },

    #[error("Criterion '{criterion_id}' has a zero normalization factor")]
    DegenerateCriterion { criterion_id: String },

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: &'static str },

    #[error("Decision matrix has no entries")]
    EmptyDecisionMatrix,

    #[error("Field '{field}' cannot be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("Duplicate entry for option '{option_id}' on criterion '{criterion_id}'{}", decision_maker_suffix(.decision_maker_id))]
    DuplicateEntry {
        option_id: String,
        criterion_id: String,
        decision_maker_id: Option<String>,
    },

    #[error("Criterion '{criterion_id}' is marked both as cost and as benefit")]
    InconsistentCriterionDirection { criterion_id: String },

    #[error("Criterion '{criterion_id}' has a different weight on option '{option_id}'")]
    InconsistentCriterionWeight {
        criterion_id: String,
        option_id: String,
    },

    #[error("All options are identical on every criterion; closeness is undefined")]
    IndistinguishableOptions,

    #[error("{actual} decision makers supplied, at most {max} allowed")]
    TooManyDecisionMakers { max: usize, actual: usize },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

fn decision_maker_suffix(decision_maker_id: &Option<String>) -> String {
    decision_maker_id
        .as_ref()
        .map(|id| format!(" from decision maker '{}'", id))
        .unwrap_or_default()
}

impl RankingError {
    /// Creates an invalid fuzzy number error.
    pub fn invalid_fuzzy_number(a: Decimal, b: Decimal, c: Decimal, reason: &'static str) -> Self {
        RankingError::InvalidFuzzyNumber { a, b, c, reason }
    }

    /// Creates a missing weight/score error for a crisp or aggregated entry.
    pub fn missing(option_id: impl Into<String>, criterion_id: impl Into<String>) -> Self {
        RankingError::MissingScoreOrWeight {
            option_id: option_id.into(),
            criterion_id: criterion_id.into(),
            decision_maker_id: None,
        }
    }

    /// Creates a missing weight/score error attributed to one decision maker.
    pub fn missing_from(
        option_id: impl Into<String>,
        criterion_id: impl Into<String>,
        decision_maker_id: impl Into<String>,
    ) -> Self {
        RankingError::MissingScoreOrWeight {
            option_id: option_id.into(),
            criterion_id: criterion_id.into(),
            decision_maker_id: Some(decision_maker_id.into()),
        }
    }

    /// Creates a duplicate entry error.
    pub fn duplicate(
        option_id: impl Into<String>,
        criterion_id: impl Into<String>,
        decision_maker_id: Option<String>,
    ) -> Self {
        RankingError::DuplicateEntry {
            option_id: option_id.into(),
            criterion_id: criterion_id.into(),
            decision_maker_id,
        }
    }

    /// Creates a degenerate criterion error.
    pub fn degenerate(criterion_id: impl Into<String>) -> Self {
        RankingError::DegenerateCriterion {
            criterion_id: criterion_id.into(),
        }
    }

    /// Creates an inconsistent direction error.
    pub fn inconsistent_direction(criterion_id: impl Into<String>) -> Self {
        RankingError::InconsistentCriterionDirection {
            criterion_id: criterion_id.into(),
        }
    }

    /// Creates an inconsistent weight error for the first option that disagrees.
    pub fn inconsistent_weight(criterion_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        RankingError::InconsistentCriterionWeight {
            criterion_id: criterion_id.into(),
            option_id: option_id.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(field: &'static str, reason: impl Into<String>) -> Self {
        RankingError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InvalidFuzzyNumber { .. } => ErrorCode::InvalidFuzzyNumber,
            RankingError::EmptyCombineSet => ErrorCode::EmptyCombineSet,
            RankingError::MissingScoreOrWeight { .. } => ErrorCode::MissingScoreOrWeight,
            RankingError::DegenerateCriterion { .. } => ErrorCode::DegenerateCriterion,
            RankingError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            RankingError::ArithmeticOverflow { .. } => ErrorCode::ArithmeticOverflow,
            RankingError::EmptyDecisionMatrix => ErrorCode::EmptyDecisionMatrix,
            RankingError::EmptyIdentifier { .. } => ErrorCode::EmptyField,
            RankingError::DuplicateEntry { .. } => ErrorCode::DuplicateEntry,
            RankingError::InconsistentCriterionDirection { .. } => {
                ErrorCode::InconsistentCriterionDirection
            }
            RankingError::InconsistentCriterionWeight { .. } => ErrorCode::InconsistentCriterionWeight,
            RankingError::IndistinguishableOptions => ErrorCode::IndistinguishableOptions,
            RankingError::TooManyDecisionMakers { .. } => ErrorCode::TooManyDecisionMakers,
            RankingError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }

    /// Returns true if the error was raised by input validation rather than arithmetic.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            RankingError::DegenerateCriterion { .. }
                | RankingError::DivisionByZero { .. }
                | RankingError::ArithmeticOverflow { .. }
                | RankingError::IndistinguishableOptions
        )
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidFuzzyNumber,
    EmptyCombineSet,
    MissingScoreOrWeight,
    EmptyDecisionMatrix,
    EmptyField,
    DuplicateEntry,
    InconsistentCriterionDirection,
    InconsistentCriterionWeight,
    TooManyDecisionMakers,
    InvalidFormat,

    // Computation errors
    DegenerateCriterion,
    DivisionByZero,
    ArithmeticOverflow,
    IndistinguishableOptions,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidFuzzyNumber => "INVALID_FUZZY_NUMBER",
            ErrorCode::EmptyCombineSet => "EMPTY_COMBINE_SET",
            ErrorCode::MissingScoreOrWeight => "MISSING_SCORE_OR_WEIGHT",
            ErrorCode::EmptyDecisionMatrix => "EMPTY_DECISION_MATRIX",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::DuplicateEntry => "DUPLICATE_ENTRY",
            ErrorCode::InconsistentCriterionDirection => "INCONSISTENT_CRITERION_DIRECTION",
            ErrorCode::InconsistentCriterionWeight => "INCONSISTENT_CRITERION_WEIGHT",
            ErrorCode::TooManyDecisionMakers => "TOO_MANY_DECISION_MAKERS",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::DegenerateCriterion => "DEGENERATE_CRITERION",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            ErrorCode::IndistinguishableOptions => "INDISTINGUISHABLE_OPTIONS",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_error_mentions_option_and_criterion() {
        let err = RankingError::missing("O1", "C2");
        assert_eq!(
            err.to_string(),
            "Missing weight or score for option 'O1' on criterion 'C2'"
        );
    }

    #[test]
    fn missing_from_error_mentions_decision_maker() {
        let err = RankingError::missing_from("O1", "C2", "dm-2");
        assert_eq!(
            err.to_string(),
            "Missing weight or score for option 'O1' on criterion 'C2' from decision maker 'dm-2'"
        );
    }

    #[test]
    fn invalid_fuzzy_number_displays_components() {
        let err = RankingError::invalid_fuzzy_number(dec!(2), dec!(4), dec!(3), "components must satisfy a <= b <= c");
        assert_eq!(
            err.to_string(),
            "Invalid fuzzy number (2, 4, 3): components must satisfy a <= b <= c"
        );
    }

    #[test]
    fn codes_display_as_screaming_snake_case() {
        assert_eq!(RankingError::EmptyCombineSet.code().to_string(), "EMPTY_COMBINE_SET");
        assert_eq!(
            RankingError::degenerate("C1").code().to_string(),
            "DEGENERATE_CRITERION"
        );
        assert_eq!(ErrorCode::EmptyField.to_string(), "EMPTY_FIELD");
        assert_eq!(
            RankingError::inconsistent_weight("C1", "O2").code().to_string(),
            "INCONSISTENT_CRITERION_WEIGHT"
        );
    }

    #[test]
    fn arithmetic_errors_are_not_validation_errors() {
        assert!(RankingError::missing("O1", "C1").is_validation());
        assert!(RankingError::EmptyCombineSet.is_validation());
        assert!(RankingError::inconsistent_weight("C1", "O2").is_validation());
        assert!(!RankingError::degenerate("C1").is_validation());
        assert!(!RankingError::IndistinguishableOptions.is_validation());
        assert!(!RankingError::DivisionByZero { operation: "divide" }.is_validation());
    }
}
