//! Integration tests for Info/Debug level filtering.
//!
//! Debug output is suppressed only when the stored level is exactly
//! `Level::INFO`; every other value, recognized or not, lets it through.
//! Info output is never filtered.

use logging::{Level, LineLogger, LogFlags};
use logging_sink::SharedBuffer;

fn plain_logger() -> (LineLogger<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    (LineLogger::new(buffer.clone(), "", LogFlags::empty()), buffer)
}

// ============================================================================
// Debug Filtering Tests
// ============================================================================

/// Verifies Debug is emitted for every level other than INFO.
#[test]
fn debug_emits_for_every_level_except_info() {
    for raw in [0, 1, 199, 201, 202, -200, i32::MAX, i32::MIN] {
        let (logger, buffer) = plain_logger();
        logger.set_level(Level::from_raw(raw));
        logger.debug(&[&"visible"]);
        logger.debugf(format_args!("{}\n", raw));
        assert_eq!(
            buffer.to_string_lossy(),
            format!("[DEBUG] visible\n[DEBUG] {raw}\n"),
            "level {raw}"
        );
    }
}

/// Verifies INFO level leaves the sink untouched for Debug calls.
#[test]
fn debug_writes_nothing_at_info_level() {
    let (logger, buffer) = plain_logger();
    logger.set_level(Level::INFO);

    logger.debug(&[&"a"]);
    logger.debug(&[]);
    logger.debugf(format_args!("b {}\n", 2));

    assert!(buffer.is_empty());
}

/// Verifies Debug resumes once the level moves away from INFO.
#[test]
fn debug_resumes_after_level_change() {
    let (logger, buffer) = plain_logger();
    logger.set_level(Level::INFO);
    logger.debug(&[&"dropped"]);
    logger.set_level(Level::DEBUG);
    logger.debug(&[&"kept"]);

    assert_eq!(buffer.to_string_lossy(), "[DEBUG] kept\n");
}

/// Verifies a fresh logger emits Debug before any level is set.
#[test]
fn fresh_logger_emits_debug() {
    let (logger, buffer) = plain_logger();
    assert_eq!(logger.level(), Level::default());
    logger.debug(&[&"x", &1]);
    assert_eq!(buffer.to_string_lossy(), "[DEBUG] x 1\n");
}

// ============================================================================
// Info Emission Tests
// ============================================================================

/// Verifies Info is written regardless of the level.
#[test]
fn info_ignores_level() {
    for level in [Level::INFO, Level::DEBUG, Level::default(), Level::from_raw(-1)] {
        let (logger, buffer) = plain_logger();
        logger.set_level(level);
        logger.info(&[&"hello"]);
        logger.infof(format_args!("{}-{}\n", "a", 1));
        assert_eq!(buffer.to_string_lossy(), "[INFO] hello\n[INFO] a-1\n");
    }
}

/// Verifies the plain variant renders operands like a sequence print.
#[test]
fn info_renders_operands_space_separated() {
    let (logger, buffer) = plain_logger();
    let name = String::from("svc");
    logger.info(&[&name, &42, &true, &-1.5]);
    assert_eq!(buffer.to_string_lossy(), "[INFO] svc 42 true -1.5\n");
}

/// Verifies the formatted variant leaves line termination to the caller.
#[test]
fn infof_leaves_newline_to_caller() {
    let (logger, buffer) = plain_logger();
    logger.infof(format_args!("progress {}%", 50));
    assert_eq!(buffer.to_string_lossy(), "[INFO] progress 50%");
}

/// Verifies format directives apply only to the supplied arguments.
#[test]
fn infof_applies_directives_to_arguments() {
    let (logger, buffer) = plain_logger();
    logger.infof(format_args!("{:>5}|{:<4}|{:#x}\n", "ab", 7, 255));
    assert_eq!(buffer.to_string_lossy(), "[INFO]    ab|7   |0xff\n");
}
