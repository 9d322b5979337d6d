//! Configuration management for the form input server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; nothing is ever written to stdout, which the
//! MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Longest overlay delay accepted, in milliseconds.
const MAX_OVERLAY_DELAY_MS: u64 = 10_000;

/// Configuration for the form input server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email errors and suggestions stay hidden until the trimmed input is
    /// longer than this many characters (default: 5)
    pub email_suggestion_min_length: usize,

    /// Delay before a submitting form shows its blocking overlay (default: 300)
    pub overlay_delay_ms: u64,

    /// Whether tool calls are counted (default: true)
    pub metrics_enabled: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `EMAIL_SUGGESTION_MIN_LENGTH`: characters before email feedback shows (default: 5)
    /// - `SUBMIT_OVERLAY_DELAY_MS`: overlay delay in milliseconds (default: 300, max: 10000)
    /// - `METRICS_ENABLED`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let email_suggestion_min_length = Self::parse_env_usize("EMAIL_SUGGESTION_MIN_LENGTH", 5)?;
        let overlay_delay_ms = Self::parse_env_u64("SUBMIT_OVERLAY_DELAY_MS", 300)?;

        if overlay_delay_ms > MAX_OVERLAY_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                var: "SUBMIT_OVERLAY_DELAY_MS".to_string(),
                reason: format!("Must be at most {}", MAX_OVERLAY_DELAY_MS),
            });
        }

        let metrics_enabled = Self::parse_env_bool("METRICS_ENABLED", true)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            email_suggestion_min_length,
            overlay_delay_ms,
            metrics_enabled,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
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

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
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

    /// The overlay delay as a chrono duration.
    pub fn overlay_delay(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.overlay_delay_ms as i64)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            email_suggestion_min_length: 5,
            overlay_delay_ms: 300,
            metrics_enabled: true,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.email_suggestion_min_length, 5);
        assert_eq!(config.overlay_delay_ms, 300);
        assert!(config.metrics_enabled);
        assert_eq!(config.log_level, "error");
        assert_eq!(config.overlay_delay(), chrono::Duration::milliseconds(300));
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("EMAIL_SUGGESTION_MIN_LENGTH", "8");
        guard.set("SUBMIT_OVERLAY_DELAY_MS", "500");
        guard.set("METRICS_ENABLED", "false");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.email_suggestion_min_length, 8);
        assert_eq!(config.overlay_delay_ms, 500);
        assert!(!config.metrics_enabled);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_overlay_delay_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("SUBMIT_OVERLAY_DELAY_MS", "60000");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "SUBMIT_OVERLAY_DELAY_MS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_bool() {
        let mut guard = EnvGuard::new();
        guard.set("METRICS_ENABLED", "maybe");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "METRICS_ENABLED");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        let result = Config::parse_env_usize("TEST_USIZE_INVALID", 10);
        assert!(result.is_err());
    }
}
