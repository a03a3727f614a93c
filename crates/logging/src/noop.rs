//! crates/logging/src/noop.rs
//! Logger that discards everything.

use crate::logger::{Logger, LoggerScope, RootLogger, ScopeEndOptions, ScopeOptions};
use crate::segment::{LogOptions, Segment};
use crate::severity::Severity;

/// A logger that discards all entries.
///
/// Useful for:
/// - Disabling logging without optional loggers at call sites
/// - Unit tests where log output would be noise
///
/// # Example
///
/// ```
/// use logscope::{Logger, NoopLogger, RootLogger, ScopeOptions};
///
/// let mut logger = NoopLogger;
/// logger.with_text("discarded").error("");
///
/// let mut scope = logger.start_scope("work", ScopeOptions::default());
/// scope.information("discarded as well");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl NoopLogger {
    /// Name reported by [`RootLogger::name`].
    pub const NAME: &'static str = "NoopLogger";
}

impl Logger for NoopLogger {
    #[inline]
    fn push_segment(&mut self, _segment: Segment) {}

    #[inline]
    fn write(&mut self, _severity: Severity, _text: &str, _options: LogOptions) {}
}

impl RootLogger for NoopLogger {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn start_scope(&self, _label: &str, _options: ScopeOptions) -> Box<dyn LoggerScope> {
        Box::new(NoopLoggerScope)
    }
}

/// Scope returned by [`NoopLogger::start_scope`](RootLogger::start_scope).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLoggerScope;

impl Logger for NoopLoggerScope {
    #[inline]
    fn push_segment(&mut self, _segment: Segment) {}

    #[inline]
    fn write(&mut self, _severity: Severity, _text: &str, _options: LogOptions) {}
}

impl LoggerScope for NoopLoggerScope {
    #[inline]
    fn end(&mut self, _options: ScopeEndOptions) {}
}
