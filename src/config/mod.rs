//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MCDM_TOPSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mcdm_topsis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reporting {:?} decimal places", config.ranking.score_decimal_places);
//! ```

mod error;
mod ranking;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use ranking::RankingConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with no variables set.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Ranking output and input limits
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MCDM_TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDM_TOPSIS__RANKING__SCORE_DECIMAL_PLACES=4` -> `ranking.score_decimal_places = 4`
    /// - `MCDM_TOPSIS__TELEMETRY__JSON=true` -> `telemetry.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MCDM_TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ranking.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("MCDM_TOPSIS__RANKING__SCORE_DECIMAL_PLACES");
        env::remove_var("MCDM_TOPSIS__RANKING__MAX_DECISION_MAKERS");
        env::remove_var("MCDM_TOPSIS__TELEMETRY__LOG_LEVEL");
        env::remove_var("MCDM_TOPSIS__TELEMETRY__JSON");
    }

    #[test]
    fn test_load_with_no_variables_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ranking, RankingConfig::default());
        assert_eq!(config.telemetry, TelemetryConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDM_TOPSIS__RANKING__SCORE_DECIMAL_PLACES", "4");
        env::set_var("MCDM_TOPSIS__RANKING__MAX_DECISION_MAKERS", "3");
        env::set_var("MCDM_TOPSIS__TELEMETRY__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ranking.score_decimal_places, Some(4));
        assert_eq!(config.ranking.max_decision_makers, 3);
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_load_validated_rejects_zero_decision_makers() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDM_TOPSIS__RANKING__MAX_DECISION_MAKERS", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(
                ValidationError::InvalidMaxDecisionMakers
            ))
        ));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDM_TOPSIS__RANKING__MAX_DECISION_MAKERS", "many");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
