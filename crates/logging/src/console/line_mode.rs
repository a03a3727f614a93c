//! crates/logging/src/console/line_mode.rs

/// Controls whether a [`WriterConsole`](super::WriterConsole) terminates each rendered entry with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered entry.
    #[default]
    WithNewline,
    /// Emit the rendered entry without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when rendering an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use logscope::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean "append a newline" flag into a [`LineMode`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineMode;

    #[test]
    fn line_mode_defaults_to_newlines() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn line_mode_from_bool() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    }
}
