//! crates/logging/src/global.rs
//! Process-wide logger instance behind the `info!`/`debug!` macros.
//!
//! The slot is empty until [`init`] (or [`install`]) runs. The fire-and-forget
//! entry points ([`info`], [`infof`], [`debug`], [`debugf`], [`set_level`] and
//! the macros) panic when called before initialization; [`logger`] reports the
//! same condition as [`LogError::Uninitialized`] instead.

use std::fmt::{self, Display};
use std::io::Write;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::flags::LogFlags;
use crate::level::Level;
use crate::logger::LineLogger;

/// Sink type stored by the process-wide logger.
pub type BoxedSink = Box<dyn Write + Send>;

/// Logger type stored in the process-wide slot.
pub type GlobalLogger = LineLogger<BoxedSink>;

static GLOBAL: RwLock<Option<Arc<GlobalLogger>>> = RwLock::new(None);

/// Creates the process-wide logger, replacing any previous instance.
///
/// The new instance starts at [`Level::default()`]; a level stored on the
/// previous instance is not carried over.
pub fn init<W>(sink: W, prefix: impl Into<String>, flags: LogFlags)
where
    W: Write + Send + 'static,
{
    let sink: BoxedSink = Box::new(sink);
    install(LineLogger::new(sink, prefix, flags));
}

/// Creates the process-wide logger from `config`, replacing any previous instance.
pub fn init_with_config<W>(config: LoggerConfig, sink: W)
where
    W: Write + Send + 'static,
{
    let sink: BoxedSink = Box::new(sink);
    install(config.build(sink));
}

/// Installs an already constructed logger as the process-wide instance.
pub fn install(logger: GlobalLogger) {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        report_replacement(&logger);
    }
    *slot = Some(Arc::new(logger));
}

#[cfg(feature = "tracing")]
fn report_replacement(logger: &GlobalLogger) {
    tracing::debug!(
        target: crate::logger::SELF_TARGET,
        flags = %logger.flags(),
        "replacing process-wide line logger"
    );
}

#[cfg(not(feature = "tracing"))]
fn report_replacement(_logger: &GlobalLogger) {}

/// Returns the process-wide logger.
pub fn logger() -> Result<Arc<GlobalLogger>, LogError> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(LogError::Uninitialized)
}

/// Reports whether [`init`] or [`install`] has run.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Stores `level` on the process-wide logger.
#[track_caller]
pub fn set_level(level: Level) {
    require().set_level(level);
}

/// Process-wide [`LineLogger::info`].
#[track_caller]
pub fn info(values: &[&dyn Display]) {
    require().info(values);
}

/// Process-wide [`LineLogger::infof`].
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    require().infof(args);
}

/// Process-wide [`LineLogger::debug`].
#[track_caller]
pub fn debug(values: &[&dyn Display]) {
    require().debug(values);
}

/// Process-wide [`LineLogger::debugf`].
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    require().debugf(args);
}

#[track_caller]
fn require() -> Arc<GlobalLogger> {
    match logger() {
        Ok(logger) => logger,
        Err(error) => panic!("{error}"),
    }
}
