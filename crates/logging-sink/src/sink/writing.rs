use super::LineWriter;
use crate::line_mode::LineMode;
use std::borrow::Cow;
use std::io::{self, Write};

impl<W> LineWriter<W>
where
    W: Write,
{
    /// Writes one line to the underlying writer.
    ///
    /// With [`LineMode::WithNewline`] a `\n` is appended unless `line` already
    /// ends with one. The bytes reach the writer through a single
    /// [`Write::write_all`] call made while the lock is held, then the writer
    /// is flushed.
    pub fn write_line(&self, line: &[u8], line_mode: LineMode) -> io::Result<()> {
        let bytes = terminate(line, line_mode);
        let mut writer = self.lock();
        writer.write_all(&bytes)?;
        writer.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

fn terminate(line: &[u8], line_mode: LineMode) -> Cow<'_, [u8]> {
    if !line_mode.append_newline() || line.ends_with(b"\n") {
        return Cow::Borrowed(line);
    }

    let mut owned = Vec::with_capacity(line.len() + 1);
    owned.extend_from_slice(line);
    owned.push(b'\n');
    Cow::Owned(owned)
}
