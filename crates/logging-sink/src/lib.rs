#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the serialized line-writer primitive that the
//! `logging` crate builds on. A [`LineWriter`] owns an arbitrary
//! [`std::io::Write`] implementor behind a mutex and accepts fully rendered
//! lines, so concurrent callers never interleave bytes within a line.
//!
//! # Design
//!
//! Each call to [`LineWriter::write_line`] performs exactly one `write_all`
//! followed by a `flush` while the lock is held. The caller decides whether a
//! trailing newline is appended by selecting a [`LineMode`]. No buffering or
//! batching happens across calls.
//!
//! [`SharedBuffer`] is a cloneable in-memory writer. Handing one clone to a
//! [`LineWriter`] and keeping another lets tests and embedders inspect what
//! was written without tearing the writer back out of the logger.
//!
//! # Invariants
//!
//! - One `write_line` call produces one contiguous run of bytes in the writer.
//! - `LineMode::WithNewline` never doubles a newline the line already ends with.
//! - A poisoned lock is recovered; a panic in one writer thread does not stop
//!   other threads from logging.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer unchanged.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineMode, LineWriter, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let writer = LineWriter::new(buffer.clone());
//!
//! writer.write_line(b"[INFO] ready", LineMode::WithNewline).unwrap();
//! writer.write_line(b"[INFO] partial", LineMode::WithoutNewline).unwrap();
//!
//! assert_eq!(buffer.to_string_lossy(), "[INFO] ready\n[INFO] partial");
//! ```
//!
//! # See also
//!
//! - `logging` crate for levels, flags, and the `info!`/`debug!` macros.

mod line_mode;
mod sink;

pub use line_mode::LineMode;
pub use sink::{LineWriter, SharedBuffer};
