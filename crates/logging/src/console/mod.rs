//! crates/logging/src/console/mod.rs
//! Output primitives that receive formatted argument lists.
//!
//! Loggers decide *what* arguments to pass and *how many times*; the types in
//! this module only deliver them. [`OutputTarget`] is the minimal contract of
//! a categorized output (session-replay clients implement just this), and
//! [`Console`] adds the collapsible groups used by console scopes.
//!
//! Every primitive returns a [`SinkResult`]. Loggers hand each call to
//! `deliver`, which discards the failure so one broken destination never
//! interrupts a scope replay or the caller.

mod error;
mod line_mode;
mod memory;
mod render;
#[cfg(feature = "tracing")]
mod tracing_bridge;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;
mod writer;

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::segment::LogArg;
use crate::severity::Severity;

pub use error::{SinkError, SinkResult};
pub use line_mode::LineMode;
pub use memory::{ConsoleCall, MemoryConsole};
pub use render::render_plain;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{CONSOLE_TARGET, TracingConsole, init_tracing, init_tracing_from_env};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::WebConsole;
pub use writer::WriterConsole;

/// Categorized output function an entry is delivered through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    /// Regular output (`console.log`).
    Log,
    /// Warning output (`console.warn`).
    Warn,
    /// Error output (`console.error`).
    Error,
}

impl ConsoleMethod {
    /// Returns the output method used for entries of `severity`.
    #[must_use]
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Debug | Severity::Information => Self::Log,
            Severity::Warning => Self::Warn,
            Severity::Error | Severity::Critical => Self::Error,
        }
    }
}

/// Destination accepting categorized argument lists.
pub trait OutputTarget: Send + Sync {
    /// Writes a regular entry.
    fn log(&self, args: &[LogArg]) -> SinkResult;

    /// Writes a warning entry.
    fn warn(&self, args: &[LogArg]) -> SinkResult;

    /// Writes an error entry.
    fn error(&self, args: &[LogArg]) -> SinkResult;

    /// Writes an entry through `method`.
    fn emit(&self, method: ConsoleMethod, args: &[LogArg]) -> SinkResult {
        match method {
            ConsoleMethod::Log => self.log(args),
            ConsoleMethod::Warn => self.warn(args),
            ConsoleMethod::Error => self.error(args),
        }
    }
}

/// Developer console: categorized output plus collapsible groups.
pub trait Console: OutputTarget {
    /// Opens a collapsed group labelled by `label`.
    fn group_collapsed(&self, label: &[LogArg]) -> SinkResult;

    /// Closes the innermost open group.
    fn group_end(&self) -> SinkResult;
}

/// Runs one primitive call and discards its failure.
///
/// A returned [`SinkError`] is dropped. A panic is contained as well where
/// the build unwinds; with `panic = "abort"`, the only strategy available on
/// `wasm32-unknown-unknown`, it still aborts the process.
pub(crate) fn deliver(call: impl FnOnce() -> SinkResult) {
    let _ = panic::catch_unwind(AssertUnwindSafe(call));
}

/// Returns the console used when a logger is created implicitly.
///
/// This is the browser console on `wasm32` with the `web` feature, and a
/// [`WriterConsole`] on standard error everywhere else.
#[must_use]
pub fn default_console() -> Arc<dyn Console> {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    {
        Arc::new(WebConsole::new())
    }

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    {
        Arc::new(WriterConsole::new(std::io::stderr()))
    }
}
