//! Configuration management for the rolo address book.
//!
//! This module handles loading and validating configuration from environment
//! variables. All variables are optional; the defaults give the behavior the
//! test suite assumes (a 7-day window, no weekend adjustment).

use crate::error::{ConfigError, ConfigResult};
use crate::models::WeekendPolicy;
use std::env;

/// Configuration for the rolo address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inclusive upper bound on `days_left` for the birthdays report (default: 7)
    pub birthday_window_days: i64,

    /// How to treat occurrences landing on a weekend (default: Exact)
    pub weekend_policy: WeekendPolicy,

    /// Maximum number of fuzzy match results to return (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: report window in days (default: 7)
    /// - `BIRTHDAY_WEEKEND_SHIFT`: `true` observes weekend birthdays on the
    ///   following Monday (default: false)
    /// - `MAX_MATCH_RESULTS`: max fuzzy match results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: min confidence score (default: 30)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", 7)?;
        if birthday_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let weekend_policy = if Self::parse_env_bool("BIRTHDAY_WEEKEND_SHIFT", false)? {
            WeekendPolicy::ShiftToMonday
        } else {
            WeekendPolicy::Exact
        };

        let max_match_results = Self::parse_env_usize("MAX_MATCH_RESULTS", 5)?;
        let match_confidence_threshold = Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", 30)?;

        // Validate confidence threshold is 0-100
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            weekend_policy,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: 7,
            weekend_policy: WeekendPolicy::Exact,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
