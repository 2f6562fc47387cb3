//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so running with an empty environment is
//! fine.

use crate::error::{ConfigError, ConfigResult};
use crate::store::DEFAULT_WINDOW_DAYS;
use std::env;

/// Largest accepted birthday window, one leap year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Prompt printed before every command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Width of the upcoming-birthdays window in days (default: 7)
    pub birthday_window_days: u32,

    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthdays window, 1-366 (default: 7)
    /// - `BOT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let prompt = env::var("BOT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            prompt: DEFAULT_PROMPT.to_string(),
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
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("BOT_PROMPT", "> ");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_window_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }

        guard.set("BIRTHDAY_WINDOW_DAYS", "400");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_window_not_a_number() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "a week");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "-3");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
