//! crates/logging/src/logger.rs
//! The leveled line logger.

use std::fmt::{self, Display, Write as _};
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicI32, Ordering};

use logging_sink::{LineMode, LineWriter};

use crate::call_site::{CallerLocation, ResolveCallSite};
use crate::context;
use crate::flags::LogFlags;
use crate::level::{Level, Tag};

/// Target used for the logger's own `tracing` diagnostics.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub const SELF_TARGET: &str = "logging::sink";

/// Leveled line logger writing `[INFO] ` / `[DEBUG] ` tagged lines to a sink.
///
/// Each logging call renders its whole line (tag, optional context prefix,
/// message) into a local buffer and hands it to the [`LineWriter`] in a single
/// write, so lines from concurrent callers are never torn and a line's tag
/// always belongs to its own message.
///
/// Sink errors never reach the caller; with the `tracing` feature enabled they
/// are reported through `tracing::warn!`.
///
/// # Examples
///
/// ```
/// use logging::{Level, LineLogger, LogFlags};
/// use logging_sink::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let logger = LineLogger::new(buffer.clone(), "", LogFlags::empty());
///
/// logger.info(&[&"hello"]);
/// logger.set_level(Level::INFO);
/// logger.debug(&[&"dropped"]);
/// logger.infof(format_args!("n={:03}\n", 7));
///
/// assert_eq!(buffer.to_string_lossy(), "[INFO] hello\n[INFO] n=007\n");
/// ```
pub struct LineLogger<W, R = CallerLocation> {
    writer: LineWriter<W>,
    prefix: String,
    flags: LogFlags,
    level: AtomicI32,
    call_sites: R,
}

impl<W> LineLogger<W> {
    /// Creates a logger writing to `sink`.
    ///
    /// The level starts at [`Level::default()`], which lets Debug output
    /// through until [`set_level`](Self::set_level) stores [`Level::INFO`].
    /// No argument is validated.
    #[must_use]
    pub fn new(sink: W, prefix: impl Into<String>, flags: LogFlags) -> Self {
        Self {
            writer: LineWriter::new(sink),
            prefix: prefix.into(),
            flags,
            level: AtomicI32::new(Level::default().as_raw()),
            call_sites: CallerLocation,
        }
    }
}

impl<W, R> LineLogger<W, R> {
    /// Replaces the call-site resolver used for the context prefix.
    #[must_use]
    pub fn with_call_sites<R2>(self, call_sites: R2) -> LineLogger<W, R2> {
        LineLogger {
            writer: self.writer,
            prefix: self.prefix,
            flags: self.flags,
            level: self.level,
            call_sites,
        }
    }

    /// Stores `level` as the new threshold. Any value is accepted.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.as_raw(), Ordering::Relaxed);
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_raw(self.level.load(Ordering::Relaxed))
    }

    /// Reports whether Debug calls currently produce output.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.level().allows_debug()
    }

    /// Returns the flags supplied at construction.
    #[must_use]
    pub const fn flags(&self) -> LogFlags {
        self.flags
    }

    /// Returns the prefix supplied at construction.
    ///
    /// Output lines start with the level tag instead of this prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Borrows the serialized writer.
    #[must_use]
    pub const fn writer(&self) -> &LineWriter<W> {
        &self.writer
    }

    /// Consumes the logger and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W, R> LineLogger<W, R>
where
    W: Write,
    R: ResolveCallSite,
{
    /// Writes `values` separated by spaces and terminated by a newline,
    /// tagged `[INFO] `. Never filtered.
    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.emit_values(Tag::Info, Location::caller(), values);
    }

    /// Writes the rendered `args`, tagged `[INFO] `. Never filtered.
    ///
    /// No newline is appended; terminate the format string with `\n` to end
    /// the line.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit_args(Tag::Info, Location::caller(), args);
    }

    /// Like [`info`](Self::info) with the `[DEBUG] ` tag, dropped when the
    /// level is [`Level::INFO`].
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        if self.debug_enabled() {
            self.emit_values(Tag::Debug, Location::caller(), values);
        }
    }

    /// Like [`infof`](Self::infof) with the `[DEBUG] ` tag, dropped when the
    /// level is [`Level::INFO`].
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.debug_enabled() {
            self.emit_args(Tag::Debug, Location::caller(), args);
        }
    }

    /// Info path with an explicit resolver, used by the tracing bridge.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn info_with<C>(&self, call_sites: &C, caller: &'static Location<'static>, text: &str)
    where
        C: ResolveCallSite + ?Sized,
    {
        self.emit_text(Tag::Info, call_sites, caller, text);
    }

    /// Debug path with an explicit resolver, used by the tracing bridge.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn debug_with<C>(&self, call_sites: &C, caller: &'static Location<'static>, text: &str)
    where
        C: ResolveCallSite + ?Sized,
    {
        if self.debug_enabled() {
            self.emit_text(Tag::Debug, call_sites, caller, text);
        }
    }

    fn emit_text<C>(&self, tag: Tag, call_sites: &C, caller: &'static Location<'static>, text: &str)
    where
        C: ResolveCallSite + ?Sized,
    {
        let mut line = self.start_line(tag, call_sites, caller);
        line.push_str(text);
        line.push('\n');
        self.finish_line(&line, LineMode::WithNewline);
    }

    fn emit_values(&self, tag: Tag, caller: &'static Location<'static>, values: &[&dyn Display]) {
        let mut line = self.start_line(tag, &self.call_sites, caller);
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{value}");
        }
        line.push('\n');
        self.finish_line(&line, LineMode::WithNewline);
    }

    fn emit_args(&self, tag: Tag, caller: &'static Location<'static>, args: fmt::Arguments<'_>) {
        let mut line = self.start_line(tag, &self.call_sites, caller);
        let _ = line.write_fmt(args);
        self.finish_line(&line, LineMode::WithoutNewline);
    }

    fn start_line<C>(&self, tag: Tag, call_sites: &C, caller: &'static Location<'static>) -> String
    where
        C: ResolveCallSite + ?Sized,
    {
        let mut line = String::with_capacity(128);
        line.push_str(tag.as_str());
        if self.flags.emits_context() {
            let site = call_sites.resolve(caller);
            context::push_context(&mut line, context::now(), site.as_ref());
        }
        line
    }

    fn finish_line(&self, line: &str, line_mode: LineMode) {
        if let Err(error) = self.writer.write_line(line.as_bytes(), line_mode) {
            report_write_error(&error);
        }
    }
}

#[cfg(feature = "tracing")]
fn report_write_error(error: &std::io::Error) {
    tracing::warn!(target: SELF_TARGET, %error, "dropped log line: sink write failed");
}

#[cfg(not(feature = "tracing"))]
fn report_write_error(_error: &std::io::Error) {}

impl<W, R> fmt::Debug for LineLogger<W, R>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("writer", &self.writer)
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
