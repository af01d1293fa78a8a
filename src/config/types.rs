//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::ValueEnum;

use crate::config::constants::{
    CONFIDENCE_DEFAULT, CONFIDENCE_EVENT, CONFIDENCE_FAILURE_FACTOR, CONFIDENCE_ISSUES_FACTOR,
    CONFIDENCE_RECIPE, CONFIDENCE_WEBSITE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_VALIDATION_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format for CLI commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Heuristic confidence scores assigned to generated schemas.
///
/// These are fixed rules rather than calibrated probabilities. The defaults
/// are the values the generator has always used; override them to tune.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceConfig {
    /// Base confidence for archetypes without a dedicated value
    pub default: f64,
    /// Base confidence for the WebSite fallback
    pub website: f64,
    /// Base confidence for Event schemas
    pub event: f64,
    /// Base confidence for Recipe schemas
    pub recipe: f64,
    /// Multiplier when the validation API reports issues
    pub issues_factor: f64,
    /// Multiplier when the validation API call fails
    pub failure_factor: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            default: CONFIDENCE_DEFAULT,
            website: CONFIDENCE_WEBSITE,
            event: CONFIDENCE_EVENT,
            recipe: CONFIDENCE_RECIPE,
            issues_factor: CONFIDENCE_ISSUES_FACTOR,
            failure_factor: CONFIDENCE_FAILURE_FACTOR,
        }
    }
}

impl ConfidenceConfig {
    /// Base confidence for a generated schema of `schema_type`.
    pub fn base_for(&self, schema_type: &str) -> f64 {
        match schema_type {
            "WebSite" => self.website,
            "Event" => self.event,
            "Recipe" => self.recipe,
            _ => self.default,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use schema_audit::Config;
///
/// let config = Config {
///     timeout_seconds: 30,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Result output format
    pub output_format: OutputFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Endpoint of the page validation API
    pub validation_endpoint: String,

    /// Confidence scores for generated schemas
    pub confidence: ConfidenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            validation_endpoint: DEFAULT_VALIDATION_ENDPOINT.to_string(),
            confidence: ConfidenceConfig::default(),
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        if url::Url::parse(&self.validation_endpoint).is_err() {
            return Err(ConfigValidationError {
                field: "validation_endpoint",
                message: format!(
                    "'{}' is not an absolute URL (expected e.g. https://host/path)",
                    self.validation_endpoint
                ),
            });
        }

        let c = &self.confidence;
        let scores = [
            ("confidence.default", c.default),
            ("confidence.website", c.website),
            ("confidence.event", c.event),
            ("confidence.recipe", c.recipe),
            ("confidence.issues_factor", c.issues_factor),
            ("confidence.failure_factor", c.failure_factor),
        ];
        for (field, value) in scores {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError {
                    field,
                    message: format!("must be between 0.0 and 1.0, got {value}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_confidence_base_for() {
        let confidence = ConfidenceConfig::default();
        assert_eq!(confidence.base_for("WebSite"), 0.95);
        assert_eq!(confidence.base_for("Event"), 0.75);
        assert_eq!(confidence.base_for("Recipe"), 0.75);
        assert_eq!(confidence.base_for("Product"), 0.85);
        assert_eq!(confidence.base_for("BlogPosting"), 0.85);
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.validation_endpoint, DEFAULT_VALIDATION_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_confidence_defaults() {
        let c = ConfidenceConfig::default();
        assert_eq!(c.default, 0.85);
        assert_eq!(c.website, 0.95);
        assert_eq!(c.event, 0.75);
        assert_eq!(c.recipe, 0.75);
        assert_eq!(c.issues_factor, 0.8);
        assert_eq!(c.failure_factor, 0.7);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "timeout_seconds");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_relative_endpoint() {
        let config = Config {
            validation_endpoint: "/v1/validate".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "validation_endpoint");
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let mut config = Config::default();
        config.confidence.issues_factor = 1.5;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "confidence.issues_factor");
        assert!(err.message.contains("1.5"));
    }
}
