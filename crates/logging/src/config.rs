//! crates/logging/src/config.rs
//! Application-level logging configuration.
//!
//! [`LoggingConfig`] holds the two settings applications usually expose: a
//! `verbose` switch and a minimum severity. It deserializes from any serde
//! format, reads the `LOGSCOPE_VERBOSE` and `LOGSCOPE_LEVEL` environment
//! variables, and assembles the [`CompositeLogger`] the application writes to.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::composite::{CompositeLogger, compose};
use crate::logger::{LoggerOptions, RootLogger};
use crate::severity::{ParseSeverityError, Severity};

/// Environment variable enabling the implicit console logger.
pub const VERBOSE_ENV: &str = "LOGSCOPE_VERBOSE";

/// Environment variable holding the minimum severity name.
pub const LEVEL_ENV: &str = "LOGSCOPE_LEVEL";

/// Error returned when a configuration value cannot be interpreted.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A boolean switch held an unrecognised value.
    #[error("invalid value `{value}` for {variable} (expected 1, true, yes, on, 0, false, no or off)")]
    InvalidFlag {
        /// Name of the offending variable.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A severity variable did not name a severity.
    #[error("invalid value for {variable}: {source}")]
    InvalidSeverity {
        /// Name of the offending variable.
        variable: &'static str,
        /// The underlying parse failure.
        #[source]
        source: ParseSeverityError,
    },
}

/// Settings used to assemble the application logger.
///
/// Missing fields take their default values when deserializing.
///
/// ```
/// use logscope::{LoggingConfig, Severity};
///
/// let config: LoggingConfig = serde_json::from_str(r#"{ "minimum_severity": "warning" }"#).unwrap();
/// assert!(!config.verbose);
/// assert_eq!(config.minimum_severity, Severity::Warning);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Adds a console logger when no other logger is supplied.
    pub verbose: bool,
    /// Entries below this severity are discarded by the implicit console logger.
    pub minimum_severity: Severity,
}

impl LoggingConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Unset or empty variables keep their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// ```
    /// use logscope::{LoggingConfig, Severity};
    ///
    /// let config = LoggingConfig::from_lookup(|name| match name {
    ///     "LOGSCOPE_VERBOSE" => Some("yes".to_owned()),
    ///     "LOGSCOPE_LEVEL" => Some("warn".to_owned()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert!(config.verbose);
    /// assert_eq!(config.minimum_severity, Severity::Warning);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unrecognised value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_empty(lookup(VERBOSE_ENV)) {
            config.verbose = parse_flag(VERBOSE_ENV, &value)?;
        }

        if let Some(value) = non_empty(lookup(LEVEL_ENV)) {
            config.minimum_severity =
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidSeverity {
                        variable: LEVEL_ENV,
                        source,
                    })?;
        }

        Ok(config)
    }

    /// Returns the options given to loggers created from this configuration.
    #[must_use]
    pub const fn logger_options(&self) -> LoggerOptions {
        LoggerOptions::with_minimum_severity(self.minimum_severity)
    }

    /// Assembles the application logger around `loggers`.
    ///
    /// When `verbose` is set and `loggers` is empty, a console logger honoring
    /// `minimum_severity` is added.
    #[must_use]
    pub fn build(&self, loggers: Vec<Box<dyn RootLogger>>) -> CompositeLogger {
        compose(self.verbose, loggers, self.logger_options())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            variable,
            value: value.to_owned(),
        }),
    }
}
