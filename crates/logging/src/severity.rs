//! crates/logging/src/severity.rs
//! Ordered severity scale used as the filter threshold of every logger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log entry, ordered from the most verbose to the most severe.
///
/// A logger configured with a minimum severity `M` processes a terminal call of
/// severity `S` only when `S >= M`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Diagnostics useful while developing.
    #[default]
    Debug,
    /// Regular operational messages.
    Information,
    /// Something unexpected that does not prevent the operation.
    Warning,
    /// A failed operation.
    Error,
    /// A failure the application cannot recover from.
    Critical,
}

impl Severity {
    /// Every severity, from the most verbose to the most severe.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the lower-case name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Reports whether an entry of this severity passes the `minimum` threshold.
    ///
    /// ```
    /// use logscope::Severity;
    ///
    /// assert!(Severity::Error.passes(Severity::Warning));
    /// assert!(Severity::Warning.passes(Severity::Warning));
    /// assert!(!Severity::Debug.passes(Severity::Information));
    /// ```
    #[must_use]
    pub fn passes(self, minimum: Self) -> bool {
        self >= minimum
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity `{input}` (expected debug, information, warning, error or critical)")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        match name.as_str() {
            "debug" => Ok(Self::Debug),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            _ => Err(ParseSeverityError {
                input: s.to_owned(),
            }),
        }
    }
}
