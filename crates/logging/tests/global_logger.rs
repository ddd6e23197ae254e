//! Integration tests for the process-wide logger and its macros.
//!
//! The global slot is shared by every test in this binary, so each test takes
//! `SERIAL` before touching it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use logging::{Level, LogFlags, LoggerConfig, debug, debugf, global, info, infof};
use logging_sink::SharedBuffer;

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn fresh(flags: LogFlags) -> SharedBuffer {
    let buffer = SharedBuffer::new();
    global::init(buffer.clone(), "", flags);
    buffer
}

// ============================================================================
// Initialization Tests
// ============================================================================

/// Verifies the documented example `Info("hello")` with no flags.
#[test]
fn init_then_info_writes_plain_line() {
    let _guard = serial();
    let buffer = fresh(LogFlags::empty());

    info!("hello");

    assert_eq!(buffer.to_string_lossy(), "[INFO] hello\n");
    assert!(global::is_initialized());
}

/// Verifies re-initialization replaces the sink and resets the level.
#[test]
fn reinit_replaces_instance_and_level() {
    let _guard = serial();
    let first = fresh(LogFlags::empty());
    global::set_level(Level::INFO);
    debug!("dropped");

    let second = fresh(LogFlags::empty());
    debug!("kept");

    assert!(first.is_empty());
    assert_eq!(second.to_string_lossy(), "[DEBUG] kept\n");
    let logger = global::logger().expect("initialized");
    assert_eq!(logger.level(), Level::default());
}

/// Verifies a configuration can seed the process-wide logger.
#[test]
fn init_with_config_applies_level_and_prefix() {
    let _guard = serial();
    let buffer = SharedBuffer::new();
    let config = LoggerConfig::new()
        .with_prefix("svc ")
        .with_level(Level::INFO);
    global::init_with_config(config, buffer.clone());

    debug!("dropped");
    infof!("up {}\n", 1);

    assert_eq!(buffer.to_string_lossy(), "[INFO] up 1\n");
    let logger = global::logger().expect("initialized");
    assert_eq!(logger.prefix(), "svc ");
}

// ============================================================================
// Macro Tests
// ============================================================================

/// Verifies the plain macros join operands with spaces.
#[test]
fn macros_join_operands() {
    let _guard = serial();
    let buffer = fresh(LogFlags::empty());
    global::set_level(Level::DEBUG);

    let port = 8080;
    info!("listening on", port);
    debug!("x", 1,);
    info!();

    assert_eq!(
        buffer.to_string_lossy(),
        "[INFO] listening on 8080\n[DEBUG] x 1\n[INFO] \n"
    );
}

/// Verifies the formatted macros respect the level filter.
#[test]
fn formatted_macros_follow_filter() {
    let _guard = serial();
    let buffer = fresh(LogFlags::empty());

    debugf!("attempt {}\n", 1);
    global::set_level(Level::INFO);
    debugf!("attempt {}\n", 2);
    infof!("done after {} attempts\n", 1);

    assert_eq!(
        buffer.to_string_lossy(),
        "[DEBUG] attempt 1\n[INFO] done after 1 attempts\n"
    );
}

/// Verifies macro lines report the macro invocation site.
#[test]
fn macros_report_invocation_site() {
    let _guard = serial();
    let buffer = fresh(LogFlags::CONTEXT);

    let line = line!() + 1;
    info!("here");

    let output = buffer.to_string_lossy();
    let expected = format!(" global_logger.rs:{line}: here\n");
    assert!(output.starts_with("[INFO] "), "{output}");
    assert!(output.ends_with(&expected), "{output}");
}

/// Verifies the function entry points report their caller too.
#[test]
fn functions_report_caller_site() {
    let _guard = serial();
    let buffer = fresh(LogFlags::CONTEXT);

    let line = line!() + 1;
    global::debugf(format_args!("{}\n", "direct"));

    let output = buffer.to_string_lossy();
    let expected = format!(" global_logger.rs:{line}: direct\n");
    assert!(output.starts_with("[DEBUG] "), "{output}");
    assert!(output.ends_with(&expected), "{output}");
}
