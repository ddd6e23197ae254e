#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` prints leveled lines to a configurable sink. Every line starts
//! with a severity tag (`[INFO] ` or `[DEBUG] `). With the flag set
//! `DATE | TIME | SHORT_FILE` the tag is followed by an RFC 3339 timestamp and
//! the `file:line` of the calling code.
//!
//! # Design
//!
//! [`LineLogger`] is an explicit handle owned by the application and passed to
//! the code that logs. It sits on top of the serialized
//! [`LineWriter`](logging_sink::LineWriter): each call renders its complete
//! line locally and hands it over in a single write, so concurrent callers
//! never tear lines or swap tags.
//!
//! The [`global`] module keeps a process-wide instance for code that prefers
//! the `info!`/`infof!`/`debug!`/`debugf!` macros.
//!
//! # Invariants
//!
//! - Info output is never filtered.
//! - Debug output is dropped only when the level is exactly [`Level::INFO`].
//!   Every other stored value, including unrecognized ones, lets it through.
//! - Only the exact flag set [`LogFlags::CONTEXT`] produces the context
//!   prefix. The remaining flags are accepted and stored but have no effect.
//! - The formatted variants never append a newline. The plain variants
//!   always end the line.
//!
//! # Errors
//!
//! Logging calls never return errors. Sink failures are dropped (reported
//! through `tracing` with the `tracing` feature). The process-wide entry
//! points panic when used before [`global::init`]; [`global::logger`]
//! reports the same condition as [`LogError::Uninitialized`].
//!
//! # Examples
//!
//! ```
//! use logging::{Level, LineLogger, LogFlags};
//! use logging_sink::SharedBuffer;
//!
//! let buffer = SharedBuffer::new();
//! let logger = LineLogger::new(buffer.clone(), "", LogFlags::empty());
//!
//! logger.set_level(Level::DEBUG);
//! logger.debug(&[&"x", &1]);
//! logger.info(&[&"hello"]);
//!
//! assert_eq!(buffer.to_string_lossy(), "[DEBUG] x 1\n[INFO] hello\n");
//! ```
//!
//! # See also
//!
//! - `logging_sink` for the line writer and in-memory sinks.

mod call_site;
mod config;
mod context;
mod error;
mod flags;
pub mod global;
mod level;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::{CallSite, CallerLocation, NoCallSite, ResolveCallSite};
pub use config::LoggerConfig;
pub use error::{LogError, ParseFlagsError, ParseLevelError};
pub use flags::LogFlags;
pub use level::Level;
pub use logger::LineLogger;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LineLoggerLayer, init_tracing, init_tracing_with_filter};
