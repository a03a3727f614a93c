//! crates/logging/src/console/error.rs
//!
//! Failures reported by output primitives.

use std::io;

use thiserror::Error;

/// Result returned by every output primitive call.
pub type SinkResult = Result<(), SinkError>;

/// Failure of an output primitive to deliver an entry.
///
/// Loggers discard these: a failing sink never fails the caller and is
/// never reported through another sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// The destination refused the entry.
    #[error("entry rejected: {0}")]
    Rejected(String),
}

impl SinkError {
    /// Builds a [`SinkError::Rejected`] from any message.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn io_error_converts() {
        let error: SinkError = io::Error::new(ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(error, SinkError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: closed");
    }

    #[test]
    fn rejected_displays_its_reason() {
        assert_eq!(
            SinkError::rejected("quota exceeded").to_string(),
            "entry rejected: quota exceeded"
        );
    }
}
