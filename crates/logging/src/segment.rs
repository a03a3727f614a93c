//! crates/logging/src/segment.rs
//! Segment values appended by the fluent builder and the arguments they render to.

use std::error::Error;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::style::StyleMap;

/// Literal emitted for an explicit line break.
pub const LINE_BREAK: &str = "\r\n";

/// Options accepted when appending a text segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextOptions {
    /// Style applied to the text by sinks that support styling.
    pub style: Option<StyleMap>,
    /// Whether a space separates the text from the preceding text fragment.
    pub leading_space: bool,
}

impl TextOptions {
    /// Options for styled text with the default spacing.
    #[must_use]
    pub fn styled(style: impl Into<StyleMap>) -> Self {
        Self {
            style: Some(style.into()),
            leading_space: true,
        }
    }

    /// Returns the options with the style replaced.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Returns the options with the leading space suppressed.
    #[must_use]
    pub fn without_leading_space(mut self) -> Self {
        self.leading_space = false;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            style: None,
            leading_space: true,
        }
    }
}

/// Options accepted by terminal severity calls for their final text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Style applied to the final text.
    pub style: Option<StyleMap>,
}

impl LogOptions {
    /// Options styling the final text.
    #[must_use]
    pub fn styled(style: impl Into<StyleMap>) -> Self {
        Self {
            style: Some(style.into()),
        }
    }
}

impl From<LogOptions> for TextOptions {
    fn from(options: LogOptions) -> Self {
        Self {
            style: options.style,
            leading_space: true,
        }
    }
}

/// Owned snapshot of an error and its source chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorValue {
    message: String,
    sources: Vec<String>,
}

impl ErrorValue {
    /// Creates an error value from a message and its causes, outermost first.
    #[must_use]
    pub fn new(message: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            message: message.into(),
            sources,
        }
    }

    /// Captures the display text of `error` and of every error in its source chain.
    #[must_use]
    pub fn from_error<E: Error + ?Sized>(error: &E) -> Self {
        let mut sources = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            sources.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message: error.to_string(),
            sources,
        }
    }

    /// Returns the message of the outermost error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the messages of the causes, outermost first.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for source in &self.sources {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

/// One typed unit of log content.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Text, optionally styled.
    Text {
        /// The text itself; never empty.
        content: String,
        /// Styling and spacing options.
        options: TextOptions,
    },
    /// A structured value.
    Object(Value),
    /// An error snapshot.
    Error(ErrorValue),
    /// An explicit line break.
    LineBreak,
}

impl Segment {
    /// Builds a text segment, or `None` when `content` is empty.
    #[must_use]
    pub fn text(content: &str, options: TextOptions) -> Option<Self> {
        if content.is_empty() {
            return None;
        }

        Some(Self::Text {
            content: content.to_owned(),
            options,
        })
    }

    /// Builds an object segment, or `None` when `value` serializes to `null`
    /// or cannot be serialized at all.
    #[must_use]
    pub fn object<T: Serialize + ?Sized>(value: &T) -> Option<Self> {
        match serde_json::to_value(value) {
            Ok(Value::Null) | Err(_) => None,
            Ok(value) => Some(Self::Object(value)),
        }
    }

    /// Builds an error segment. Errors are kept even when their message is
    /// empty.
    #[must_use]
    pub fn error<E: Error + ?Sized>(error: &E) -> Self {
        Self::Error(ErrorValue::from_error(error))
    }

    /// Returns the style of a text segment.
    #[must_use]
    pub fn style(&self) -> Option<&StyleMap> {
        match self {
            Self::Text { options, .. } => options.style.as_ref(),
            _ => None,
        }
    }

    /// Returns the argument this segment contributes when rendered on its own.
    #[must_use]
    pub fn to_arg(&self) -> LogArg {
        match self {
            Self::Text { content, .. } => LogArg::Text(content.clone()),
            Self::Object(value) => LogArg::Object(value.clone()),
            Self::Error(error) => LogArg::Error(error.clone()),
            Self::LineBreak => LogArg::Text(LINE_BREAK.to_owned()),
        }
    }
}

/// One positional argument handed to a sink primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum LogArg {
    /// A string argument: merged text, a CSS string or a placeholder marker.
    Text(String),
    /// A structured value.
    Object(Value),
    /// An error snapshot.
    Error(ErrorValue),
}

impl LogArg {
    /// Returns the text of a string argument.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Reports whether this argument is the line break literal.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.as_text() == Some(LINE_BREAK)
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Object(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "Error: {error}"),
        }
    }
}

impl From<&str> for LogArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for LogArg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        Self::Object(value)
    }
}

impl From<ErrorValue> for LogArg {
    fn from(error: ErrorValue) -> Self {
        Self::Error(error)
    }
}
