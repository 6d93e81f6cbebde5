//! Criterion value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decision criterion and its preference direction.
///
/// A criterion with `is_negative = true` is a cost criterion: lower raw
/// scores are preferred. Otherwise it is a benefit criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    #[serde(default)]
    pub is_negative: bool,
}

impl Criterion {
    /// Creates a benefit criterion.
    pub fn benefit(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_negative: false,
        }
    }

    /// Creates a cost criterion.
    pub fn cost(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_negative: true,
        }
    }

    /// Creates a criterion with an explicit direction.
    pub fn new(id: impl Into<String>, is_negative: bool) -> Self {
        Self {
            id: id.into(),
            is_negative,
        }
    }

    /// Returns true if lower scores are preferred.
    pub fn is_cost(&self) -> bool {
        self.is_negative
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_negative { "cost" } else { "benefit" };
        write!(f, "{} ({})", self.id, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_direction() {
        assert!(!Criterion::benefit("Quality").is_cost());
        assert!(Criterion::cost("Price").is_cost());
        assert!(Criterion::new("Price", true).is_cost());
    }

    #[test]
    fn missing_direction_defaults_to_benefit() {
        let criterion: Criterion = serde_json::from_str(r#"{"id": "C1"}"#).unwrap();
        assert_eq!(criterion, Criterion::benefit("C1"));
    }

    #[test]
    fn displays_kind() {
        assert_eq!(Criterion::cost("Price").to_string(), "Price (cost)");
        assert_eq!(Criterion::benefit("Speed").to_string(), "Speed (benefit)");
    }
}
