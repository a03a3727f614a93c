//! crates/logging/src/replay_logger.rs
//! Logger feeding a session-replay client.
//!
//! Session-replay clients record each argument of a call separately, so the
//! root logger hands over the raw segment values in call order. Scope entries
//! are prefixed with the `(label)` of their scope, carry their merged text
//! and are written when the scope ends, without any grouping.

use std::fmt;
use std::sync::Arc;

use crate::accumulator::SegmentBuffer;
use crate::console::{ConsoleMethod, OutputTarget, deliver};
use crate::format::{format_labelled, format_raw};
use crate::logger::{Logger, LoggerOptions, LoggerScope, RootLogger, ScopeEndOptions, ScopeOptions};
use crate::scope::ScopeBuffer;
use crate::segment::{LogOptions, Segment};
use crate::severity::Severity;

/// Root logger writing raw segment values to an [`OutputTarget`].
///
/// ```
/// use std::sync::Arc;
/// use logscope::{ConsoleCall, LogArg, Logger, LoggerOptions, MemoryConsole, ReplayLogger};
///
/// let client = Arc::new(MemoryConsole::new());
/// let mut logger = ReplayLogger::new(client.clone(), LoggerOptions::default());
///
/// logger.with_text("Cart").with_text("checked out").error("");
///
/// assert_eq!(
///     client.calls(),
///     vec![ConsoleCall::Error(vec![LogArg::from("Cart"), LogArg::from("checked out")])]
/// );
/// ```
pub struct ReplayLogger {
    target: Arc<dyn OutputTarget>,
    options: LoggerOptions,
    pending: SegmentBuffer,
}

impl ReplayLogger {
    /// Name reported by [`RootLogger::name`].
    pub const NAME: &'static str = "ReplayLogger";

    /// Creates a logger writing to `target`.
    #[must_use]
    pub fn new(target: Arc<dyn OutputTarget>, options: LoggerOptions) -> Self {
        Self {
            target,
            options,
            pending: SegmentBuffer::new(),
        }
    }

    /// Returns the severity below which entries are discarded.
    #[must_use]
    pub const fn minimum_severity(&self) -> Severity {
        self.options.minimum_severity
    }
}

impl fmt::Debug for ReplayLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplayLogger")
            .field("options", &self.options)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Logger for ReplayLogger {
    fn push_segment(&mut self, segment: Segment) {
        self.pending.push(segment);
    }

    fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
        if let Some(segments) =
            self.pending
                .complete(severity, self.options.minimum_severity, text, options)
        {
            let args = format_raw(&segments);
            deliver(|| {
                self.target
                    .emit(ConsoleMethod::for_severity(severity), &args)
            });
        }
    }
}

impl RootLogger for ReplayLogger {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn start_scope(&self, label: &str, _options: ScopeOptions) -> Box<dyn LoggerScope> {
        Box::new(ReplayLoggerScope::new(
            Arc::clone(&self.target),
            self.options,
            label,
        ))
    }
}

/// Scope of a [`ReplayLogger`].
///
/// Entries are formatted as `["(label)", merged text, objects and errors...]`
/// when written and sent through their severity method when the scope ends.
/// Label styles are ignored.
pub struct ReplayLoggerScope {
    target: Arc<dyn OutputTarget>,
    options: LoggerOptions,
    pending: SegmentBuffer,
    buffer: ScopeBuffer,
}

impl ReplayLoggerScope {
    /// Creates an open scope writing to `target`.
    #[must_use]
    pub fn new(target: Arc<dyn OutputTarget>, options: LoggerOptions, label: &str) -> Self {
        Self {
            target,
            options,
            pending: SegmentBuffer::new(),
            buffer: ScopeBuffer::new(label, None),
        }
    }

    /// Returns the scope label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.buffer.label()
    }

    /// Reports whether [`LoggerScope::end`] has not been called yet.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.buffer.is_open()
    }
}

impl fmt::Debug for ReplayLoggerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplayLoggerScope")
            .field("options", &self.options)
            .field("pending", &self.pending)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

impl Logger for ReplayLoggerScope {
    fn push_segment(&mut self, segment: Segment) {
        if self.buffer.is_open() {
            self.pending.push(segment);
        }
    }

    fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
        if !self.buffer.is_open() {
            self.pending.clear();
            return;
        }

        if let Some(segments) =
            self.pending
                .complete(severity, self.options.minimum_severity, text, options)
        {
            let args = format_labelled(self.buffer.label(), &segments);
            self.buffer
                .enqueue(ConsoleMethod::for_severity(severity), args);
        }
    }
}

impl LoggerScope for ReplayLoggerScope {
    fn end(&mut self, options: ScopeEndOptions) {
        self.pending.clear();

        if let Some(replay) = self.buffer.end(options) {
            for write in &replay.writes {
                deliver(|| self.target.emit(write.method, &write.args));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleCall, MemoryConsole};
    use crate::segment::LogArg;

    fn logger() -> (Arc<MemoryConsole>, ReplayLogger) {
        let client = Arc::new(MemoryConsole::new());
        let logger = ReplayLogger::new(client.clone(), LoggerOptions::default());
        (client, logger)
    }

    #[test]
    fn name_is_stable() {
        let (_, logger) = logger();
        assert_eq!(logger.name(), "ReplayLogger");
    }

    #[test]
    fn root_ignores_styles() {
        let (client, mut logger) = logger();
        logger.write(
            Severity::Information,
            "styled",
            LogOptions::styled([("color", "red")]),
        );

        assert_eq!(
            client.calls(),
            vec![ConsoleCall::Log(vec![LogArg::from("styled")])]
        );
    }

    #[test]
    fn scope_writes_wait_for_end_and_keep_their_method() {
        let (client, logger) = logger();
        let mut scope = logger.start_scope("checkout", ScopeOptions::default());
        scope.with_text("payment").warning("declined");
        scope.debug("retrying");
        assert!(client.is_empty());

        scope.end(ScopeEndOptions::default());
        assert_eq!(
            client.calls(),
            vec![
                ConsoleCall::Warn(
                    ["(checkout)", "payment declined"].map(LogArg::from).to_vec()
                ),
                ConsoleCall::Log(["(checkout)", "retrying"].map(LogArg::from).to_vec()),
            ]
        );
    }

    #[test]
    fn dismissed_scope_writes_nothing() {
        let (client, logger) = logger();
        let mut scope = logger.start_scope("checkout", ScopeOptions::default());
        scope.error("failed");
        scope.end(ScopeEndOptions::dismissed());
        scope.end(ScopeEndOptions::default());

        assert!(client.is_empty());
    }
}
