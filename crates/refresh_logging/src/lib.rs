#![deny(missing_docs)]
//! Shared logging utilities for the pull-to-refresh workspace.
//!
//! This crate provides the `refresh_*` logging macros used by the core, the
//! refresh adapter and the demo app, plus a minimal test initializer for the
//! global logger.

use std::cell::Cell;

thread_local! {
    /// Frame counter of the UI loop running on this thread.
    static FRAME_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Records the frame the UI loop on this thread is currently processing.
/// The frame loop calls this once per frame before dispatching messages.
pub fn set_frame_tick(frame: u64) {
    FRAME_TICK.with(|v| v.set(frame));
}

/// Returns the frame recorded by [`set_frame_tick`] on this thread, or 0.
pub fn frame_tick() -> u64 {
    FRAME_TICK.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current frame.
#[macro_export]
macro_rules! refresh_trace {
    ($($arg:tt)*) => {{
        log::trace!("[f{}] {}", $crate::frame_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current frame.
#[macro_export]
macro_rules! refresh_debug {
    ($($arg:tt)*) => {{
        log::debug!("[f{}] {}", $crate::frame_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current frame.
#[macro_export]
macro_rules! refresh_info {
    ($($arg:tt)*) => {{
        log::info!("[f{}] {}", $crate::frame_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current frame.
#[macro_export]
macro_rules! refresh_warn {
    ($($arg:tt)*) => {{
        log::warn!("[f{}] {}", $crate::frame_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current frame.
#[macro_export]
macro_rules! refresh_error {
    ($($arg:tt)*) => {{
        log::error!("[f{}] {}", $crate::frame_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
