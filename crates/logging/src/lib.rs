#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logscope` is a structured logging facade. Callers build one entry from
//! typed segments (text, styled text, structured values, errors and line
//! breaks) through a fluent builder, complete it with a severity, and the
//! facade hands the resulting argument list to one or more sinks: a developer
//! console, a session-replay client, or nothing at all. Related entries can be
//! grouped under a named scope whose output is deferred until the scope ends.
//!
//! # Design
//!
//! - [`Logger`], [`RootLogger`] and [`LoggerScope`] form the contract every
//!   sink implements. Builder calls append [`Segment`]s; terminal calls
//!   ([`Logger::debug`] to [`Logger::critical`]) format them and clear them.
//! - [`format_segments`] is the console rendering: consecutive text merges into
//!   one argument, `%c` styling applies to text written before the first
//!   structured value or line break, and structured values keep their place.
//! - [`ConsoleLogger`] writes through a [`Console`]; its scopes replay inside a
//!   collapsed group. [`ReplayLogger`] writes raw values through an
//!   [`OutputTarget`]. [`NoopLogger`] discards everything and
//!   [`CompositeLogger`] fans every call out to several loggers.
//! - Sink primitives are shared as `Arc<dyn Console>` / `Arc<dyn OutputTarget>`.
//!   [`MemoryConsole`] records calls, [`WriterConsole`] renders plain text into
//!   any [`io::Write`](std::io::Write), `TracingConsole` (feature `tracing`)
//!   emits `tracing` events and `WebConsole` (feature `web`, `wasm32` only)
//!   forwards to the browser console.
//!
//! # Invariants
//!
//! - Pending segments are cleared by every terminal call, whether or not its
//!   severity passes the logger's minimum.
//! - A sink receives nothing for a terminal call without any segment.
//! - A scope ends once: later writes and `end` calls do nothing, and a
//!   dismissed scope produces no output at all.
//! - A scope replay that opened a console group always closes it, even when
//!   an entry inside it fails.
//! - A panicking child of a [`CompositeLogger`] never prevents the following
//!   children from receiving the call, on builds that unwind.
//!
//! # Errors
//!
//! Logging calls are infallible. Sink primitives report failures as
//! [`SinkError`], which loggers discard per call. Parsing entry points return
//! errors: [`ParseSeverityError`] from [`Severity`]'s `FromStr`
//! implementation and [`ConfigError`] from [`LoggingConfig::from_env`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logscope::{
//!     ConsoleCall, ConsoleLogger, LogArg, Logger, LoggerOptions, LoggerScope, MemoryConsole,
//!     RootLogger, ScopeEndOptions, ScopeOptions, TextOptions,
//! };
//!
//! let console = Arc::new(MemoryConsole::new());
//! let logger = ConsoleLogger::new(console.clone(), LoggerOptions::default());
//!
//! let mut scope = logger.start_scope("Bootstrap", ScopeOptions::styled([("color", "blue")]));
//! scope
//!     .with_text_options("Loaded", TextOptions::styled([("fontWeight", "bold")]))
//!     .information("3 modules");
//! scope.end(ScopeEndOptions::default());
//!
//! assert_eq!(
//!     console.calls(),
//!     vec![
//!         ConsoleCall::GroupCollapsed(["%cBootstrap", "color:blue"].map(LogArg::from).to_vec()),
//!         ConsoleCall::Log(
//!             ["%cLoaded%c 3 modules", "font-weight:bold", "%s"].map(LogArg::from).to_vec()
//!         ),
//!         ConsoleCall::GroupEnd,
//!     ]
//! );
//! ```
//!
//! # See also
//!
//! - [`create_composite_logger`] and [`LoggingConfig::build`] to assemble the
//!   application logger.
//! - [`render_plain`] for the text rendering shared by the non-browser consoles.

mod accumulator;
mod composite;
mod config;
mod console;
mod console_logger;
mod format;
mod logger;
mod noop;
mod replay_logger;
mod scope;
mod segment;
mod severity;
mod style;
mod tracing_macros;

pub use accumulator::SegmentBuffer;
pub use composite::{CompositeLogger, CompositeLoggerScope, create_composite_logger};
pub use config::{ConfigError, LEVEL_ENV, LoggingConfig, VERBOSE_ENV};
#[cfg(feature = "tracing")]
pub use console::{CONSOLE_TARGET, TracingConsole, init_tracing, init_tracing_from_env};
pub use console::{
    Console, ConsoleCall, ConsoleMethod, LineMode, MemoryConsole, OutputTarget, SinkError,
    SinkResult, WriterConsole, default_console, render_plain,
};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use console::WebConsole;
pub use console_logger::{ConsoleLogger, ConsoleLoggerScope};
pub use format::{format_label, format_labelled, format_raw, format_segments};
pub use logger::{Logger, LoggerOptions, LoggerScope, RootLogger, ScopeEndOptions, ScopeOptions};
pub use noop::{NoopLogger, NoopLoggerScope};
pub use replay_logger::{ReplayLogger, ReplayLoggerScope};
pub use segment::{ErrorValue, LINE_BREAK, LogArg, LogOptions, Segment, TextOptions};
pub use severity::{ParseSeverityError, Severity};
pub use style::StyleMap;
