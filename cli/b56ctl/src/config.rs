//! CLI configuration.
//!
//! Only logging is configured through the environment; codec options are flags.

use anyhow::{bail, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// CLI configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level or filter directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("B56_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("B56_LOG_FORMAT").as_deref() {
            None => defaults.log_format,
            Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => bail!("B56_LOG_FORMAT must be 'text' or 'json', got '{other}'."),
        };

        Ok(Self {
            log_level,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_config_from_env_values() {
        let config = Config::from_lookup(|key| match key {
            "B56_LOG_LEVEL" => Some("debug".to_string()),
            "B56_LOG_FORMAT" => Some("JSON".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_config_rejects_unknown_format() {
        let result = Config::from_lookup(|key| (key == "B56_LOG_FORMAT").then(|| "xml".to_string()));
        assert!(result.is_err());
    }
}
