//! crates/logging/src/console/memory.rs
//! Console that records every call for later inspection.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Console, OutputTarget, SinkResult};
use crate::segment::LogArg;

/// One recorded console call.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleCall {
    /// `log` with its arguments.
    Log(Vec<LogArg>),
    /// `warn` with its arguments.
    Warn(Vec<LogArg>),
    /// `error` with its arguments.
    Error(Vec<LogArg>),
    /// `group_collapsed` with its label arguments.
    GroupCollapsed(Vec<LogArg>),
    /// `group_end`.
    GroupEnd,
}

impl ConsoleCall {
    /// Returns the arguments of the call, empty for [`ConsoleCall::GroupEnd`].
    #[must_use]
    pub fn args(&self) -> &[LogArg] {
        match self {
            Self::Log(args) | Self::Warn(args) | Self::Error(args) | Self::GroupCollapsed(args) => {
                args
            }
            Self::GroupEnd => &[],
        }
    }
}

/// In-memory console recording calls in the order they happen.
///
/// Useful to assert on the exact argument sequences a logger produces.
///
/// ```
/// use std::sync::Arc;
/// use logscope::{ConsoleCall, ConsoleLogger, Logger, LoggerOptions, LogArg, MemoryConsole};
///
/// let console = Arc::new(MemoryConsole::new());
/// let mut logger = ConsoleLogger::new(console.clone(), LoggerOptions::default());
///
/// logger.with_text("Hello").with_text("World").debug("");
///
/// assert_eq!(console.calls(), vec![ConsoleCall::Log(vec![LogArg::from("Hello World")])]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryConsole {
    calls: Mutex<Vec<ConsoleCall>>,
}

impl MemoryConsole {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.lock().clone()
    }

    /// Returns the recorded calls and clears the recorder.
    pub fn take(&self) -> Vec<ConsoleCall> {
        std::mem::take(&mut *self.lock())
    }

    /// Forgets every recorded call.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn record(&self, call: ConsoleCall) -> SinkResult {
        self.lock().push(call);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ConsoleCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputTarget for MemoryConsole {
    fn log(&self, args: &[LogArg]) -> SinkResult {
        self.record(ConsoleCall::Log(args.to_vec()))
    }

    fn warn(&self, args: &[LogArg]) -> SinkResult {
        self.record(ConsoleCall::Warn(args.to_vec()))
    }

    fn error(&self, args: &[LogArg]) -> SinkResult {
        self.record(ConsoleCall::Error(args.to_vec()))
    }
}

impl Console for MemoryConsole {
    fn group_collapsed(&self, label: &[LogArg]) -> SinkResult {
        self.record(ConsoleCall::GroupCollapsed(label.to_vec()))
    }

    fn group_end(&self) -> SinkResult {
        self.record(ConsoleCall::GroupEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let console = MemoryConsole::new();
        console.group_collapsed(&[LogArg::from("scope")]).unwrap();
        console.log(&[LogArg::from("inside")]).unwrap();
        console.group_end().unwrap();

        assert_eq!(console.len(), 3);
        assert_eq!(
            console.calls(),
            vec![
                ConsoleCall::GroupCollapsed(vec![LogArg::from("scope")]),
                ConsoleCall::Log(vec![LogArg::from("inside")]),
                ConsoleCall::GroupEnd,
            ]
        );
    }

    #[test]
    fn take_drains_the_recorder() {
        let console = MemoryConsole::new();
        console.warn(&[LogArg::from("careful")]).unwrap();

        let calls = console.take();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args(), [LogArg::from("careful")]);
        assert!(console.is_empty());
    }
}
