//! crates/logging/src/composite.rs
//! Fan-out of every call to several loggers.
//!
//! Sink failures are already discarded by each logger through its
//! [`SinkResult`](crate::SinkResult). Each child also runs behind its own
//! panic boundary: a child that panics is skipped for that call and the
//! remaining children still receive it. The panic payload is dropped without
//! being reported through the facade, but the process panic hook still runs.
//! Builds using `panic = "abort"`, such as `wasm32-unknown-unknown`, have no
//! such boundary.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::console::default_console;
use crate::console_logger::ConsoleLogger;
use crate::logger::{Logger, LoggerOptions, LoggerScope, RootLogger, ScopeEndOptions, ScopeOptions};
use crate::segment::{LogOptions, Segment};
use crate::severity::Severity;
use crate::tracing_macros::trace_setup;

fn isolated(call: impl FnOnce()) {
    let _ = panic::catch_unwind(AssertUnwindSafe(call));
}

/// Root logger forwarding every call to its children, in order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logscope::{
///     CompositeLogger, ConsoleLogger, Logger, LoggerOptions, MemoryConsole, ReplayLogger,
///     RootLogger,
/// };
///
/// let console = Arc::new(MemoryConsole::new());
/// let client = Arc::new(MemoryConsole::new());
/// let mut logger = CompositeLogger::new(vec![
///     Box::new(ConsoleLogger::new(console.clone(), LoggerOptions::default())),
///     Box::new(ReplayLogger::new(client.clone(), LoggerOptions::default())),
/// ]);
///
/// logger.with_text("Application").information("started");
///
/// assert_eq!(console.len(), 1);
/// assert_eq!(client.len(), 1);
/// ```
#[derive(Default)]
pub struct CompositeLogger {
    loggers: Vec<Box<dyn RootLogger>>,
}

impl CompositeLogger {
    /// Name reported by [`RootLogger::name`].
    pub const NAME: &'static str = "CompositeLogger";

    /// Creates a composite forwarding to `loggers`.
    #[must_use]
    pub fn new(loggers: Vec<Box<dyn RootLogger>>) -> Self {
        Self { loggers }
    }

    /// Appends a child logger.
    pub fn push(&mut self, logger: Box<dyn RootLogger>) {
        self.loggers.push(logger);
    }

    /// Returns the number of child loggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Reports whether the composite has no child logger.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Returns the names of the child loggers, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.loggers.iter().map(|logger| logger.name()).collect()
    }
}

impl fmt::Debug for CompositeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeLogger")
            .field("loggers", &self.names())
            .finish()
    }
}

impl Logger for CompositeLogger {
    fn push_segment(&mut self, segment: Segment) {
        for logger in &mut self.loggers {
            let segment = segment.clone();
            isolated(|| logger.push_segment(segment));
        }
    }

    fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
        for logger in &mut self.loggers {
            let options = options.clone();
            isolated(|| logger.write(severity, text, options));
        }
    }
}

impl RootLogger for CompositeLogger {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn start_scope(&self, label: &str, options: ScopeOptions) -> Box<dyn LoggerScope> {
        let scopes = self
            .loggers
            .iter()
            .filter_map(|logger| {
                panic::catch_unwind(AssertUnwindSafe(|| {
                    logger.start_scope(label, options.clone())
                }))
                .ok()
            })
            .collect();

        Box::new(CompositeLoggerScope::new(scopes))
    }
}

/// Scope forwarding every call to the scopes of the children of a
/// [`CompositeLogger`].
#[derive(Default)]
pub struct CompositeLoggerScope {
    scopes: Vec<Box<dyn LoggerScope>>,
}

impl CompositeLoggerScope {
    /// Creates a composite scope forwarding to `scopes`.
    #[must_use]
    pub fn new(scopes: Vec<Box<dyn LoggerScope>>) -> Self {
        Self { scopes }
    }

    /// Returns the number of child scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Reports whether the composite has no child scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl fmt::Debug for CompositeLoggerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeLoggerScope")
            .field("scopes", &self.scopes.len())
            .finish()
    }
}

impl Logger for CompositeLoggerScope {
    fn push_segment(&mut self, segment: Segment) {
        for scope in &mut self.scopes {
            let segment = segment.clone();
            isolated(|| scope.push_segment(segment));
        }
    }

    fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
        for scope in &mut self.scopes {
            let options = options.clone();
            isolated(|| scope.write(severity, text, options));
        }
    }
}

impl LoggerScope for CompositeLoggerScope {
    fn end(&mut self, options: ScopeEndOptions) {
        for scope in &mut self.scopes {
            let options = options.clone();
            isolated(|| scope.end(options));
        }
    }
}

/// Builds a [`CompositeLogger`] from the usual `verbose` and `loggers`
/// settings.
///
/// When `verbose` is set and `loggers` is empty, a [`ConsoleLogger`] on
/// [`default_console`] is added so verbose applications always get output.
///
/// ```
/// use logscope::{RootLogger, create_composite_logger};
///
/// let logger = create_composite_logger(true, Vec::new());
/// assert_eq!(logger.names(), ["ConsoleLogger"]);
///
/// let silent = create_composite_logger(false, Vec::new());
/// assert!(silent.is_empty());
/// assert_eq!(silent.name(), "CompositeLogger");
/// ```
#[must_use]
pub fn create_composite_logger(verbose: bool, loggers: Vec<Box<dyn RootLogger>>) -> CompositeLogger {
    compose(verbose, loggers, LoggerOptions::default())
}

/// Same as [`create_composite_logger`], with the options of the implicit
/// console logger.
pub(crate) fn compose(
    verbose: bool,
    mut loggers: Vec<Box<dyn RootLogger>>,
    console_options: LoggerOptions,
) -> CompositeLogger {
    if verbose && loggers.is_empty() {
        trace_setup!(
            minimum_severity = %console_options.minimum_severity,
            "verbose without loggers, adding a console logger"
        );
        loggers.push(Box::new(ConsoleLogger::new(default_console(), console_options)));
    }

    trace_setup!(loggers = loggers.len(), "composite logger built");
    CompositeLogger::new(loggers)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::console::MemoryConsole;

    struct Exploding;

    impl Logger for Exploding {
        fn push_segment(&mut self, _segment: Segment) {
            panic!("push_segment");
        }

        fn write(&mut self, _severity: Severity, _text: &str, _options: LogOptions) {
            panic!("write");
        }
    }

    impl RootLogger for Exploding {
        fn name(&self) -> &str {
            "Exploding"
        }

        fn start_scope(&self, _label: &str, _options: ScopeOptions) -> Box<dyn LoggerScope> {
            panic!("start_scope");
        }
    }

    #[test]
    fn panicking_child_does_not_stop_the_others() {
        let console = Arc::new(MemoryConsole::new());
        let mut logger = CompositeLogger::new(vec![
            Box::new(Exploding),
            Box::new(ConsoleLogger::new(console.clone(), LoggerOptions::default())),
        ]);

        logger.with_text("still").debug("delivered");
        assert_eq!(console.len(), 1);
    }

    #[test]
    fn child_failing_to_start_a_scope_is_left_out() {
        let console = Arc::new(MemoryConsole::new());
        let logger = CompositeLogger::new(vec![
            Box::new(Exploding),
            Box::new(ConsoleLogger::new(console.clone(), LoggerOptions::default())),
        ]);

        let mut scope = logger.start_scope("work", ScopeOptions::default());
        scope.information("inside");
        scope.end(ScopeEndOptions::default());

        assert_eq!(console.len(), 3);
    }

    #[test]
    fn explicit_loggers_disable_the_implicit_console() {
        let logger = create_composite_logger(true, vec![Box::new(crate::noop::NoopLogger)]);
        assert_eq!(logger.names(), ["NoopLogger"]);
    }

    #[test]
    fn compose_applies_console_options() {
        let logger = compose(
            true,
            Vec::new(),
            LoggerOptions::with_minimum_severity(Severity::Error),
        );
        assert_eq!(logger.len(), 1);
    }
}
