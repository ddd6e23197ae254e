/// Controls whether a [`LineWriter`](crate::LineWriter) terminates a line with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator unless the line already ends with one.
    #[default]
    WithNewline,
    /// Emit the line bytes exactly as supplied.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when writing a line.
    ///
    /// Plain `info`/`debug` output uses [`LineMode::WithNewline`] while the
    /// formatted variants use [`LineMode::WithoutNewline`], leaving line
    /// termination to the caller's format string.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
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
    /// Converts a boolean flag describing whether a trailing newline should be appended into a [`LineMode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
