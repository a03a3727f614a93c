//! crates/logging/src/console_logger.rs
//! Logger writing to a developer [`Console`].
//!
//! The root logger writes every entry immediately through the console method
//! matching its severity. Scopes buffer their entries and replay them inside
//! a collapsed group when they end. Because collapsed groups hide their
//! content, warning and more severe entries written to a scope are also
//! written immediately through `warn`/`error` at call time.
//!
//! Console failures are discarded per call. A replay always closes the group
//! it opened, even when an entry inside it fails.

use std::fmt;
use std::sync::Arc;

use crate::accumulator::SegmentBuffer;
use crate::console::{Console, ConsoleMethod, deliver};
use crate::format::{format_label, format_segments};
use crate::logger::{Logger, LoggerOptions, LoggerScope, RootLogger, ScopeEndOptions, ScopeOptions};
use crate::scope::ScopeBuffer;
use crate::segment::{LogOptions, Segment};
use crate::severity::Severity;

/// Root logger writing formatted entries to a [`Console`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logscope::{
///     ConsoleCall, ConsoleLogger, LogArg, Logger, LoggerOptions, MemoryConsole, TextOptions,
/// };
///
/// let console = Arc::new(MemoryConsole::new());
/// let mut logger = ConsoleLogger::new(console.clone(), LoggerOptions::default());
///
/// logger
///     .with_text_options("Ready", TextOptions::styled([("color", "green")]))
///     .information("in 12ms");
///
/// assert_eq!(
///     console.calls(),
///     vec![ConsoleCall::Log(
///         ["%cReady%c in 12ms", "color:green", "%s"].map(LogArg::from).to_vec()
///     )]
/// );
/// ```
pub struct ConsoleLogger {
    console: Arc<dyn Console>,
    options: LoggerOptions,
    pending: SegmentBuffer,
}

impl ConsoleLogger {
    /// Name reported by [`RootLogger::name`].
    pub const NAME: &'static str = "ConsoleLogger";

    /// Creates a logger writing to `console`.
    #[must_use]
    pub fn new(console: Arc<dyn Console>, options: LoggerOptions) -> Self {
        Self {
            console,
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

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("options", &self.options)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn push_segment(&mut self, segment: Segment) {
        self.pending.push(segment);
    }

    fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
        let Some(segments) =
            self.pending
                .complete(severity, self.options.minimum_severity, text, options)
        else {
            return;
        };

        let args = format_segments(&segments);
        deliver(|| {
            self.console
                .emit(ConsoleMethod::for_severity(severity), &args)
        });
    }
}

impl RootLogger for ConsoleLogger {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn start_scope(&self, label: &str, options: ScopeOptions) -> Box<dyn LoggerScope> {
        Box::new(ConsoleLoggerScope::new(
            Arc::clone(&self.console),
            self.options,
            label,
            options,
        ))
    }
}

/// Scope of a [`ConsoleLogger`], replayed inside a collapsed console group.
///
/// The group label is the scope label, styled with the style given to
/// [`LoggerScope::end`] or else the one given when the scope started.
/// Nothing is written when the scope is dismissed or holds no entry.
pub struct ConsoleLoggerScope {
    console: Arc<dyn Console>,
    options: LoggerOptions,
    pending: SegmentBuffer,
    buffer: ScopeBuffer,
}

impl ConsoleLoggerScope {
    /// Creates an open scope writing to `console`.
    #[must_use]
    pub fn new(
        console: Arc<dyn Console>,
        options: LoggerOptions,
        label: &str,
        scope_options: ScopeOptions,
    ) -> Self {
        Self {
            console,
            options,
            pending: SegmentBuffer::new(),
            buffer: ScopeBuffer::new(label, scope_options.label_style),
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

impl fmt::Debug for ConsoleLoggerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLoggerScope")
            .field("options", &self.options)
            .field("pending", &self.pending)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLoggerScope {
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

        let Some(segments) =
            self.pending
                .complete(severity, self.options.minimum_severity, text, options)
        else {
            return;
        };

        let args = format_segments(&segments);
        let method = ConsoleMethod::for_severity(severity);
        if method != ConsoleMethod::Log {
            deliver(|| self.console.emit(method, &args));
        }
        self.buffer.enqueue(ConsoleMethod::Log, args);
    }
}

impl LoggerScope for ConsoleLoggerScope {
    fn end(&mut self, options: ScopeEndOptions) {
        self.pending.clear();

        let Some(replay) = self.buffer.end(options) else {
            return;
        };

        let label = format_label(self.buffer.label(), replay.label_style.as_ref());
        deliver(|| self.console.group_collapsed(&label));
        for write in &replay.writes {
            deliver(|| self.console.emit(write.method, &write.args));
        }
        deliver(|| self.console.group_end());
    }
}
