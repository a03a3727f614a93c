//! crates/logging/src/tracing_macros.rs
//! Crate-internal diagnostics routed through `tracing`.
//!
//! The macros expand to nothing when the `tracing` feature is disabled.
//! They never observe console output; they only describe what the facade
//! itself decided (a scope replayed or dismissed, a logger assembled).

/// Target of scope lifecycle diagnostics.
#[cfg(feature = "tracing")]
pub(crate) const SCOPE_TARGET: &str = "logscope::scope";

/// Target of logger assembly diagnostics.
#[cfg(feature = "tracing")]
pub(crate) const SETUP_TARGET: &str = "logscope::setup";

/// Emit a scope lifecycle trace.
///
/// # Example
/// ```ignore
/// trace_scope!(label = %label, writes = count, "scope replayed");
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_scope {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::tracing_macros::SCOPE_TARGET, $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_scope {
    ($($arg:tt)*) => {};
}

/// Emit a logger assembly trace.
///
/// # Example
/// ```ignore
/// trace_setup!(loggers = count, "composite logger built");
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_setup {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::tracing_macros::SETUP_TARGET, $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_setup {
    ($($arg:tt)*) => {};
}

pub(crate) use {trace_scope, trace_setup};
