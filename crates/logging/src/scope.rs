//! crates/logging/src/scope.rs
//! Buffer of formatted writes deferred until a scope ends.
//!
//! A scope starts open and ends exactly once. While open it queues snapshots
//! of the argument lists produced at terminal-call time; ending it either
//! hands the queue back for replay or drops it when the scope is dismissed.
//! Once ended, the buffer ignores every further write and end request.

use crate::console::ConsoleMethod;
use crate::logger::ScopeEndOptions;
use crate::segment::LogArg;
use crate::style::StyleMap;
use crate::tracing_macros::trace_scope;

/// Formatted write queued by an open scope.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingWrite {
    pub(crate) method: ConsoleMethod,
    pub(crate) args: Vec<LogArg>,
}

/// Writes to replay after a scope ended without being dismissed.
#[derive(Debug)]
pub(crate) struct ScopeReplay {
    /// Style of the group label: the one given to `end`, else the one given
    /// when the scope started.
    pub(crate) label_style: Option<StyleMap>,
    pub(crate) writes: Vec<PendingWrite>,
}

#[derive(Debug)]
enum ScopeState {
    Open(Vec<PendingWrite>),
    Ended,
}

#[derive(Debug)]
pub(crate) struct ScopeBuffer {
    label: String,
    label_style: Option<StyleMap>,
    state: ScopeState,
}

impl ScopeBuffer {
    pub(crate) fn new(label: &str, label_style: Option<StyleMap>) -> Self {
        Self {
            label: label.to_owned(),
            label_style,
            state: ScopeState::Open(Vec::new()),
        }
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn is_open(&self) -> bool {
        matches!(self.state, ScopeState::Open(_))
    }

    /// Queues a write; ignored once the scope has ended.
    pub(crate) fn enqueue(&mut self, method: ConsoleMethod, args: Vec<LogArg>) {
        if let ScopeState::Open(writes) = &mut self.state {
            writes.push(PendingWrite { method, args });
        }
    }

    /// Ends the scope.
    ///
    /// Returns the queued writes unless the scope was already ended, was
    /// dismissed, or never queued anything.
    pub(crate) fn end(&mut self, options: ScopeEndOptions) -> Option<ScopeReplay> {
        let ScopeState::Open(writes) = std::mem::replace(&mut self.state, ScopeState::Ended) else {
            return None;
        };

        if options.dismiss {
            trace_scope!(label = %self.label, discarded = writes.len(), "scope dismissed");
            return None;
        }

        if writes.is_empty() {
            trace_scope!(label = %self.label, "scope ended empty");
            return None;
        }

        trace_scope!(label = %self.label, writes = writes.len(), "scope replayed");
        Some(ScopeReplay {
            label_style: options.label_style.or_else(|| self.label_style.take()),
            writes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> Vec<LogArg> {
        vec![LogArg::from(text)]
    }

    #[test]
    fn end_returns_writes_in_enqueue_order() {
        let mut buffer = ScopeBuffer::new("load", None);
        buffer.enqueue(ConsoleMethod::Log, args("first"));
        buffer.enqueue(ConsoleMethod::Error, args("second"));

        let replay = buffer.end(ScopeEndOptions::default()).expect("writes queued");
        assert_eq!(
            replay.writes,
            vec![
                PendingWrite {
                    method: ConsoleMethod::Log,
                    args: args("first"),
                },
                PendingWrite {
                    method: ConsoleMethod::Error,
                    args: args("second"),
                },
            ]
        );
        assert!(!buffer.is_open());
    }

    #[test]
    fn dismiss_discards_everything() {
        let mut buffer = ScopeBuffer::new("load", None);
        buffer.enqueue(ConsoleMethod::Log, args("x"));

        assert!(buffer.end(ScopeEndOptions::dismissed()).is_none());
        assert!(!buffer.is_open());
    }

    #[test]
    fn empty_scope_replays_nothing() {
        let mut buffer = ScopeBuffer::new("idle", None);
        assert!(buffer.end(ScopeEndOptions::default()).is_none());
    }

    #[test]
    fn second_end_and_late_writes_are_ignored() {
        let mut buffer = ScopeBuffer::new("load", None);
        buffer.enqueue(ConsoleMethod::Log, args("x"));
        assert!(buffer.end(ScopeEndOptions::default()).is_some());

        buffer.enqueue(ConsoleMethod::Log, args("late"));
        assert!(buffer.end(ScopeEndOptions::default()).is_none());
    }

    #[test]
    fn end_style_overrides_start_style() {
        let start = StyleMap::new().with("color", "blue");
        let override_style = StyleMap::new().with("color", "green");

        let mut buffer = ScopeBuffer::new("load", Some(start.clone()));
        buffer.enqueue(ConsoleMethod::Log, args("x"));
        let replay = buffer
            .end(ScopeEndOptions::styled(override_style.clone()))
            .expect("writes queued");
        assert_eq!(replay.label_style, Some(override_style));

        let mut buffer = ScopeBuffer::new("load", Some(start.clone()));
        buffer.enqueue(ConsoleMethod::Log, args("x"));
        let replay = buffer.end(ScopeEndOptions::default()).expect("writes queued");
        assert_eq!(replay.label_style, Some(start));
        assert_eq!(buffer.label(), "load");
    }
}
