//! crates/logging/src/console/tracing_bridge.rs
//! Bridge between console calls and the `tracing` ecosystem.
//!
//! [`TracingConsole`] turns every console call into a `tracing` event so that
//! applications already running a subscriber receive facade output alongside
//! their own diagnostics. [`init_tracing`] and [`init_tracing_from_env`]
//! install a default subscriber for binaries that have none.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logscope::{ConsoleLogger, LoggerOptions, TracingConsole, init_tracing};
//!
//! init_tracing("info").expect("no global subscriber yet");
//! let logger = ConsoleLogger::new(Arc::new(TracingConsole::new()), LoggerOptions::default());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::render::render_plain;
use super::{Console, OutputTarget, SinkResult};
use crate::segment::LogArg;

/// Target of the events emitted by [`TracingConsole`].
pub const CONSOLE_TARGET: &str = "logscope::console";

/// Console emitting each call as a `tracing` event.
///
/// `log` maps to `INFO`, `warn` to `WARN` and `error` to `ERROR`. Arguments
/// are rendered through [`render_plain`]; the number of currently open groups
/// is attached as the `group` field. Opening a group emits its label at
/// `INFO`.
#[derive(Debug, Default)]
pub struct TracingConsole {
    depth: AtomicUsize,
}

impl TracingConsole {
    /// Creates a console with no open group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            depth: AtomicUsize::new(0),
        }
    }

    /// Returns the number of currently open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }
}

impl OutputTarget for TracingConsole {
    fn log(&self, args: &[LogArg]) -> SinkResult {
        let group = self.depth();
        tracing::info!(target: CONSOLE_TARGET, group, "{}", render_plain(args));
        Ok(())
    }

    fn warn(&self, args: &[LogArg]) -> SinkResult {
        let group = self.depth();
        tracing::warn!(target: CONSOLE_TARGET, group, "{}", render_plain(args));
        Ok(())
    }

    fn error(&self, args: &[LogArg]) -> SinkResult {
        let group = self.depth();
        tracing::error!(target: CONSOLE_TARGET, group, "{}", render_plain(args));
        Ok(())
    }
}

impl Console for TracingConsole {
    fn group_collapsed(&self, label: &[LogArg]) -> SinkResult {
        self.log(label)?;
        self.depth.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn group_end(&self) -> SinkResult {
        let _ = self
            .depth
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |depth| {
                Some(depth.saturating_sub(1))
            });
        Ok(())
    }
}

/// Installs a global subscriber printing events that match `filter`.
///
/// `filter` uses the [`EnvFilter`] directive syntax, e.g. `"info"` or
/// `"warn,logscope::scope=trace"`. Invalid directives are ignored.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_tracing(filter: &str) -> Result<(), TryInitError> {
    install(EnvFilter::new(filter))
}

/// Installs a global subscriber configured from the `RUST_LOG` variable,
/// falling back to `info` when it is unset or invalid.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_tracing_from_env() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
