#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `linelog` bundles the workspace crates behind one dependency: the
//! [`LineLogger`] with its levels, flags, and process-wide macros from
//! `logging`, and the serialized [`LineWriter`] with in-memory sinks from
//! `logging-sink`.
//!
//! # Examples
//!
//! ```
//! use linelog::{LineLogger, LogFlags, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let logger = LineLogger::new(buffer.clone(), "", LogFlags::empty());
//! logger.info(&[&"hello"]);
//!
//! assert_eq!(buffer.to_string_lossy(), "[INFO] hello\n");
//! ```

pub use logging::{
    CallSite, CallerLocation, Level, LineLogger, LogError, LogFlags, LoggerConfig, NoCallSite,
    ParseFlagsError, ParseLevelError, ResolveCallSite, debug, debugf, global, info, infof,
};
#[cfg(feature = "tracing")]
pub use logging::{LineLoggerLayer, init_tracing, init_tracing_with_filter};
pub use logging_sink::{LineMode, LineWriter, SharedBuffer};
