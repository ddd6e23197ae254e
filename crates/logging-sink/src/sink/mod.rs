use std::fmt;
use std::sync::{Mutex, MutexGuard};

mod shared_buffer;
mod writing;

pub use shared_buffer::SharedBuffer;

/// Serialized line writer over an [`std::io::Write`] target.
///
/// The writer is stored behind a [`Mutex`] so that a `&LineWriter` can be
/// shared between threads. Every [`write_line`](Self::write_line) call holds
/// the lock for exactly one `write_all` and one `flush`, which keeps lines
/// from different callers from interleaving.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, LineWriter};
///
/// let writer = LineWriter::new(Vec::new());
/// writer.write_line(b"[DEBUG] cache warm", LineMode::WithNewline)?;
///
/// assert_eq!(writer.into_inner(), b"[DEBUG] cache warm\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineWriter<W> {
    writer: Mutex<W>,
}

impl<W> LineWriter<W> {
    /// Wraps `writer` so it can be shared between logging callers.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Runs `f` with exclusive access to the underlying writer.
    ///
    /// Lines are never written while `f` runs, so the closure observes the
    /// writer between two complete lines.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the line writer and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W> Default for LineWriter<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for LineWriter<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("writer", &*self.lock())
            .finish()
    }
}
