//! crates/logging/src/logger.rs
//! Logger traits shared by every sink implementation.
//!
//! A logger is driven in two phases. Builder calls ([`Logger::with_text`],
//! [`Logger::with_object`], [`Logger::with_error`],
//! [`Logger::with_line_break`]) append segments to the entry under
//! construction and return the logger for chaining. A terminal call
//! ([`Logger::debug`] through [`Logger::critical`], or [`Logger::write`])
//! optionally appends a final text segment, hands the entry to the sink when
//! its severity passes the configured minimum, and clears the pending
//! segments either way.
//!
//! The traits are object safe: generic builder methods are only available on
//! sized implementors, and `Box<T>` forwards every trait so boxed loggers and
//! scopes keep the fluent API.

use std::error::Error;

use serde::Serialize;

use crate::segment::{LogOptions, Segment, TextOptions};
use crate::severity::Severity;
use crate::style::StyleMap;

/// Options applied when a logger is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Entries below this severity are discarded.
    pub minimum_severity: Severity,
}

impl LoggerOptions {
    /// Creates options with the given minimum severity.
    #[must_use]
    pub const fn with_minimum_severity(minimum_severity: Severity) -> Self {
        Self { minimum_severity }
    }
}

/// Options of [`RootLogger::start_scope`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScopeOptions {
    /// Style of the scope label.
    pub label_style: Option<StyleMap>,
}

impl ScopeOptions {
    /// Creates options styling the label with `style`.
    #[must_use]
    pub fn styled(style: impl Into<StyleMap>) -> Self {
        Self {
            label_style: Some(style.into()),
        }
    }
}

/// Options of [`LoggerScope::end`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScopeEndOptions {
    /// Discards every buffered entry without any output.
    pub dismiss: bool,
    /// Label style overriding the one given when the scope started.
    pub label_style: Option<StyleMap>,
}

impl ScopeEndOptions {
    /// Options discarding the buffered entries.
    #[must_use]
    pub fn dismissed() -> Self {
        Self {
            dismiss: true,
            label_style: None,
        }
    }

    /// Options overriding the label style.
    #[must_use]
    pub fn styled(style: impl Into<StyleMap>) -> Self {
        Self {
            dismiss: false,
            label_style: Some(style.into()),
        }
    }
}

/// Builder and terminal contract implemented by every logger and scope.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logscope::{ConsoleCall, ConsoleLogger, LogArg, Logger, LoggerOptions, MemoryConsole};
/// use serde_json::json;
///
/// let console = Arc::new(MemoryConsole::new());
/// let mut logger = ConsoleLogger::new(console.clone(), LoggerOptions::default());
///
/// logger
///     .with_text("User:")
///     .with_object(&json!({ "id": 7 }))
///     .information("signed in");
///
/// assert_eq!(
///     console.calls(),
///     vec![ConsoleCall::Log(vec![
///         LogArg::from("User:"),
///         LogArg::Object(json!({ "id": 7 })),
///         LogArg::from("signed in"),
///     ])]
/// );
/// ```
pub trait Logger: Send {
    /// Appends a segment to the entry under construction.
    fn push_segment(&mut self, segment: Segment);

    /// Completes the entry at `severity`.
    ///
    /// A non-empty `text` is appended as a final text segment styled with
    /// `options`. Pending segments are cleared whether or not the entry
    /// passes the severity filter.
    fn write(&mut self, severity: Severity, text: &str, options: LogOptions);

    /// Appends a text segment separated from the previous one by a space.
    /// Empty text is ignored.
    fn with_text(&mut self, text: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.with_text_options(text, TextOptions::default())
    }

    /// Appends a text segment with explicit styling and spacing options.
    /// Empty text is ignored.
    fn with_text_options(&mut self, text: &str, options: TextOptions) -> &mut Self
    where
        Self: Sized,
    {
        if let Some(segment) = Segment::text(text, options) {
            self.push_segment(segment);
        }
        self
    }

    /// Appends a structured value.
    ///
    /// Values serializing to `null` (such as `None`) or failing to serialize
    /// are ignored.
    fn with_object<T: Serialize + ?Sized>(&mut self, value: &T) -> &mut Self
    where
        Self: Sized,
    {
        if let Some(segment) = Segment::object(value) {
            self.push_segment(segment);
        }
        self
    }

    /// Appends an error together with its source chain.
    fn with_error<E: Error + ?Sized>(&mut self, error: &E) -> &mut Self
    where
        Self: Sized,
    {
        self.push_segment(Segment::error(error));
        self
    }

    /// Appends an explicit line break.
    fn with_line_break(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.push_segment(Segment::LineBreak);
        self
    }

    /// Completes the entry at [`Severity::Debug`].
    fn debug(&mut self, text: &str) {
        self.write(Severity::Debug, text, LogOptions::default());
    }

    /// Completes the entry at [`Severity::Information`].
    fn information(&mut self, text: &str) {
        self.write(Severity::Information, text, LogOptions::default());
    }

    /// Completes the entry at [`Severity::Warning`].
    fn warning(&mut self, text: &str) {
        self.write(Severity::Warning, text, LogOptions::default());
    }

    /// Completes the entry at [`Severity::Error`].
    fn error(&mut self, text: &str) {
        self.write(Severity::Error, text, LogOptions::default());
    }

    /// Completes the entry at [`Severity::Critical`].
    fn critical(&mut self, text: &str) {
        self.write(Severity::Critical, text, LogOptions::default());
    }

    /// Completes the entry at [`Severity::Debug`] with a styled final text.
    fn debug_with(&mut self, text: &str, options: LogOptions) {
        self.write(Severity::Debug, text, options);
    }

    /// Completes the entry at [`Severity::Information`] with a styled final text.
    fn information_with(&mut self, text: &str, options: LogOptions) {
        self.write(Severity::Information, text, options);
    }

    /// Completes the entry at [`Severity::Warning`] with a styled final text.
    fn warning_with(&mut self, text: &str, options: LogOptions) {
        self.write(Severity::Warning, text, options);
    }

    /// Completes the entry at [`Severity::Error`] with a styled final text.
    fn error_with(&mut self, text: &str, options: LogOptions) {
        self.write(Severity::Error, text, options);
    }

    /// Completes the entry at [`Severity::Critical`] with a styled final text.
    fn critical_with(&mut self, text: &str, options: LogOptions) {
        self.write(Severity::Critical, text, options);
    }
}

/// Long-lived logger able to open scopes.
pub trait RootLogger: Logger {
    /// Name identifying the implementation.
    fn name(&self) -> &str;

    /// Opens a scope buffering its entries until [`LoggerScope::end`].
    ///
    /// The scope inherits this logger's minimum severity and sink.
    fn start_scope(&self, label: &str, options: ScopeOptions) -> Box<dyn LoggerScope>;
}

/// Named group of entries replayed when the scope ends.
///
/// Ending a scope is final: later terminal calls and further `end` calls do
/// nothing.
pub trait LoggerScope: Logger {
    /// Ends the scope, replaying or discarding the buffered entries.
    fn end(&mut self, options: ScopeEndOptions);
}

impl<T: Logger + ?Sized> Logger for Box<T> {
    fn push_segment(&mut self, segment: Segment) {
        (**self).push_segment(segment);
    }

    fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
        (**self).write(severity, text, options);
    }
}

impl<T: RootLogger + ?Sized> RootLogger for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn start_scope(&self, label: &str, options: ScopeOptions) -> Box<dyn LoggerScope> {
        (**self).start_scope(label, options)
    }
}

impl<T: LoggerScope + ?Sized> LoggerScope for Box<T> {
    fn end(&mut self, options: ScopeEndOptions) {
        (**self).end(options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        segments: Vec<Segment>,
        writes: Vec<(Severity, String)>,
        styles: Vec<Option<String>>,
    }

    impl Logger for Recorder {
        fn push_segment(&mut self, segment: Segment) {
            self.segments.push(segment);
        }

        fn write(&mut self, severity: Severity, text: &str, options: LogOptions) {
            self.writes.push((severity, text.to_owned()));
            self.styles.push(options.style.map(|style| style.to_css()));
        }
    }

    #[derive(Debug)]
    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl Error for Silent {}

    #[test]
    fn builder_guards_skip_empty_values() {
        let mut recorder = Recorder::default();
        recorder
            .with_text("")
            .with_object(&None::<u32>)
            .with_object(&())
            .with_text("kept")
            .with_line_break();

        assert_eq!(recorder.segments.len(), 2);
        assert_eq!(recorder.segments[1], Segment::LineBreak);
    }

    #[test]
    fn errors_with_empty_messages_are_kept() {
        let mut recorder = Recorder::default();
        recorder.with_error(&Silent);

        assert_eq!(
            recorder.segments,
            vec![Segment::Error(crate::segment::ErrorValue::new("", Vec::new()))]
        );
    }

    #[test]
    fn styled_terminals_forward_their_options() {
        let mut recorder = Recorder::default();
        recorder.debug_with("a", LogOptions::styled([("color", "red")]));
        recorder.information_with("b", LogOptions::default());
        recorder.warning_with("c", LogOptions::styled([("fontWeight", "bold")]));
        recorder.error_with("d", LogOptions::default());
        recorder.critical_with("e", LogOptions::styled([("color", "blue")]));

        let severities: Vec<Severity> = recorder.writes.iter().map(|(s, _)| *s).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert_eq!(
            recorder.styles,
            vec![
                Some("color:red".to_owned()),
                None,
                Some("font-weight:bold".to_owned()),
                None,
                Some("color:blue".to_owned()),
            ]
        );
    }

    #[test]
    fn terminals_forward_their_severity() {
        let mut recorder = Recorder::default();
        recorder.debug("a");
        recorder.information("b");
        recorder.warning("c");
        recorder.error("d");
        recorder.critical("");

        let severities: Vec<Severity> = recorder.writes.iter().map(|(s, _)| *s).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert_eq!(recorder.writes[4].1, "");
    }

    #[test]
    fn boxed_loggers_keep_the_fluent_api() {
        let mut boxed: Box<Recorder> = Box::default();
        boxed.with_text("one").with_text("two").warning("");

        assert_eq!(boxed.segments.len(), 2);
        assert_eq!(boxed.writes, vec![(Severity::Warning, String::new())]);
    }

    #[test]
    fn end_options_helpers() {
        assert!(ScopeEndOptions::dismissed().dismiss);
        let styled = ScopeEndOptions::styled([("color", "green")]);
        assert!(!styled.dismiss);
        assert_eq!(
            styled.label_style.map(|style| style.to_css()),
            Some("color:green".to_owned())
        );
    }
}
