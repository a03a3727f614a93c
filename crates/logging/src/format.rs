//! crates/logging/src/format.rs
//! Rendering of accumulated segments into the flat argument list of one sink call.
//!
//! # Console rendering
//!
//! [`format_segments`] merges consecutive text segments into a single string
//! argument. Any other segment (object, error, line break) interrupts the run:
//! the merged text is emitted first, then the interrupting value in place.
//!
//! Styled text is wrapped in `%c…%c` markers and its CSS string plus a `"%s"`
//! reset marker are appended to a styling list emitted right after the merged
//! text. Consoles only apply `%c` directives found in the first argument, so
//! styling is honoured only for text appearing before the first interruption;
//! later styled text is rendered plain. Without any styled segment the output
//! is simply the merged text runs and the structured values in call order.
//!
//! # Spacing
//!
//! A single space separates a text fragment from the preceding fragment of
//! the same run unless the fragment was appended with `leading_space` turned
//! off. A fragment starting a run (first segment, or right after an
//! interruption) never receives a space.

use crate::segment::{LINE_BREAK, LogArg, Segment, TextOptions};
use crate::style::StyleMap;

const STYLE_MARKER: &str = "%c";
const STYLE_RESET: &str = "%s";

/// Renders segments for a console-like sink.
///
/// ```
/// use logscope::{LogArg, Segment, TextOptions, format_segments};
///
/// let segments = [
///     Segment::text("Red", TextOptions::styled([("color", "red")])).unwrap(),
///     Segment::text("Blue", TextOptions::styled([("color", "blue")])).unwrap(),
/// ];
///
/// let args = format_segments(&segments);
/// assert_eq!(
///     args,
///     ["%cRed%c %cBlue%c", "color:red", "%s", "color:blue", "%s"]
///         .map(LogArg::from)
///         .to_vec()
/// );
/// ```
#[must_use]
pub fn format_segments(segments: &[Segment]) -> Vec<LogArg> {
    let mut run = TextRun::default();

    for segment in segments {
        match segment {
            Segment::Text { content, options } => run.push_text(content, options),
            other => run.interrupt(other.to_arg()),
        }
    }

    run.finish()
}

/// Renders segments as raw values in call order, one argument per segment.
///
/// Text segments are not merged and styles are ignored. This is the shape
/// expected by session-replay clients that record each argument separately.
#[must_use]
pub fn format_raw(segments: &[Segment]) -> Vec<LogArg> {
    segments.iter().map(Segment::to_arg).collect()
}

/// Renders segments behind a `"(label)"` prefix, merging all text and moving
/// structured values to the tail.
///
/// Line breaks are appended to the merged text without padding. The merged
/// text is omitted when empty.
#[must_use]
pub fn format_labelled(label: &str, segments: &[Segment]) -> Vec<LogArg> {
    let mut text = String::new();
    let mut trailing = Vec::new();
    let mut after_break = false;

    for segment in segments {
        match segment {
            Segment::Text { content, options } => {
                if !after_break {
                    append_spaced(&mut text, content, options.leading_space);
                } else {
                    text.push_str(content);
                }
                after_break = false;
            }
            Segment::LineBreak => {
                text.push_str(LINE_BREAK);
                after_break = true;
            }
            Segment::Object(_) | Segment::Error(_) => trailing.push(segment.to_arg()),
        }
    }

    let mut args = Vec::with_capacity(trailing.len() + 2);
    args.push(LogArg::Text(format!("({label})")));
    if !text.is_empty() {
        args.push(LogArg::Text(text));
    }
    args.extend(trailing);
    args
}

/// Builds the `group_collapsed` arguments of a scope label.
#[must_use]
pub fn format_label(label: &str, style: Option<&StyleMap>) -> Vec<LogArg> {
    match style {
        Some(style) => vec![
            LogArg::Text(format!("{STYLE_MARKER}{label}")),
            LogArg::Text(style.to_css()),
        ],
        None => vec![LogArg::from(label)],
    }
}

fn append_spaced(buffer: &mut String, fragment: &str, leading_space: bool) {
    if !buffer.is_empty() && leading_space {
        buffer.push(' ');
    }
    buffer.push_str(fragment);
}

/// Text accumulated since the last interruption, with its pending styling.
#[derive(Default)]
struct TextRun {
    args: Vec<LogArg>,
    text: String,
    styling: Vec<LogArg>,
}

impl TextRun {
    fn push_text(&mut self, content: &str, options: &TextOptions) {
        // %c directives only work in the first argument.
        let style = options
            .style
            .as_ref()
            .filter(|_| self.args.is_empty());

        match style {
            Some(style) => {
                let marked = format!("{STYLE_MARKER}{content}{STYLE_MARKER}");
                append_spaced(&mut self.text, &marked, options.leading_space);
                self.styling.push(LogArg::Text(style.to_css()));
                self.styling.push(LogArg::from(STYLE_RESET));
            }
            None => append_spaced(&mut self.text, content, options.leading_space),
        }
    }

    fn interrupt(&mut self, value: LogArg) {
        self.flush();
        self.args.push(value);
    }

    fn flush(&mut self) {
        if self.text.is_empty() {
            return;
        }

        self.args.push(LogArg::Text(std::mem::take(&mut self.text)));
        self.args.append(&mut self.styling);
    }

    fn finish(mut self) -> Vec<LogArg> {
        self.flush();
        self.args
    }
}
