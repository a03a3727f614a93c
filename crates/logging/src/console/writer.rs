//! crates/logging/src/console/writer.rs
//! Console rendering entries as plain text into an [`io::Write`] target.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::line_mode::LineMode;
use super::render::render_plain;
use super::{Console, OutputTarget, SinkResult};
use crate::segment::LogArg;

const INDENT: &str = "  ";

/// Console that renders argument lists as plain text into a writer.
///
/// Arguments are rendered through [`render_plain`]. Every open group indents
/// the following entries by two spaces, warnings are prefixed with
/// `warning: ` and errors with `error: `. Write failures are returned as
/// [`SinkError::Io`](super::SinkError::Io); group depth is tracked even when
/// the label could not be written.
///
/// # Examples
///
/// ```
/// use logscope::{Console, LogArg, OutputTarget, WriterConsole};
///
/// # fn main() -> Result<(), logscope::SinkError> {
/// let console = WriterConsole::new(Vec::new());
/// console.group_collapsed(&[LogArg::from("startup")])?;
/// console.warn(&[LogArg::from("slow disk")])?;
/// console.group_end()?;
/// console.log(&[LogArg::from("ready")])?;
///
/// let output = String::from_utf8(console.into_inner()).unwrap();
/// assert_eq!(output, "startup\n  warning: slow disk\nready\n");
/// # Ok(())
/// # }
/// ```
pub struct WriterConsole<W> {
    state: Mutex<WriterState<W>>,
    line_mode: LineMode,
}

struct WriterState<W> {
    writer: W,
    depth: usize,
}

impl<W> WriterConsole<W> {
    /// Creates a console that appends a newline after each entry.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a console with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(WriterState { writer, depth: 0 }),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Returns the number of currently open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.lock().depth
    }

    /// Consumes the console and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, WriterState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> WriterConsole<W> {
    fn write_entry(&self, prefix: &str, args: &[LogArg]) -> SinkResult {
        let text = render_plain(args);
        let mut state = self.lock();
        let indent = INDENT.repeat(state.depth);

        let mut entry = String::with_capacity(text.len() + indent.len() + prefix.len() + 1);
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                entry.push('\n');
            }
            entry.push_str(&indent);
            if index == 0 {
                entry.push_str(prefix);
            }
            entry.push_str(line);
        }
        if self.line_mode.append_newline() {
            entry.push('\n');
        }

        write_and_flush(&mut state.writer, entry.as_bytes())?;
        Ok(())
    }
}

fn write_and_flush<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}

impl<W: Write + Send> OutputTarget for WriterConsole<W> {
    fn log(&self, args: &[LogArg]) -> SinkResult {
        self.write_entry("", args)
    }

    fn warn(&self, args: &[LogArg]) -> SinkResult {
        self.write_entry("warning: ", args)
    }

    fn error(&self, args: &[LogArg]) -> SinkResult {
        self.write_entry("error: ", args)
    }
}

impl<W: Write + Send> Console for WriterConsole<W> {
    fn group_collapsed(&self, label: &[LogArg]) -> SinkResult {
        let written = self.write_entry("", label);
        self.lock().depth += 1;
        written
    }

    fn group_end(&self) -> SinkResult {
        let mut state = self.lock();
        state.depth = state.depth.saturating_sub(1);
        Ok(())
    }
}

impl<W: fmt::Debug> fmt::Debug for WriterConsole<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("WriterConsole")
            .field("writer", &state.writer)
            .field("depth", &state.depth)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(console: WriterConsole<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).expect("utf-8")
    }

    #[test]
    fn entries_end_with_newlines_by_default() {
        let console = WriterConsole::new(Vec::new());
        console.log(&[LogArg::from("first")]).unwrap();
        console.error(&[LogArg::from("second")]).unwrap();

        assert_eq!(output(console), "first\nerror: second\n");
    }

    #[test]
    fn without_newline_preserves_output() {
        let console = WriterConsole::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        console.log(&[LogArg::from("ready")]).unwrap();

        assert_eq!(output(console), "ready");
    }

    #[test]
    fn styled_arguments_are_rendered_plain() {
        let console = WriterConsole::new(Vec::new());
        console.log(&["%cStyled%c tail", "color:red", "%s"].map(LogArg::from)).unwrap();

        assert_eq!(output(console), "Styled tail\n");
    }

    #[test]
    fn multi_line_entries_are_indented_inside_groups() {
        let console = WriterConsole::new(Vec::new());
        console.group_collapsed(&[LogArg::from("outer")]).unwrap();
        console.group_collapsed(&["%cinner", "color:blue"].map(LogArg::from)).unwrap();
        assert_eq!(console.depth(), 2);
        console.log(&["line one", "\r\n", "line two"].map(LogArg::from)).unwrap();
        console.group_end().unwrap();
        console.group_end().unwrap();
        console.group_end().unwrap();
        assert_eq!(console.depth(), 0);

        assert_eq!(output(console), "outer\n  inner\n    line one\n    line two\n");
    }

    #[test]
    fn write_failures_are_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let console = WriterConsole::new(Broken);
        let error = console.log(&[LogArg::from("dropped")]).unwrap_err();
        assert!(matches!(error, crate::console::SinkError::Io(_)));

        assert!(console.group_collapsed(&[LogArg::from("group")]).is_err());
        assert_eq!(console.depth(), 1);
    }
}
