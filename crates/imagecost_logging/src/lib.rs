#![deny(missing_docs)]
//! Shared logging utilities for the imagecost workspace.
//!
//! This crate provides the `calc_*` logging macros used by the core state
//! machine and the terminal app, plus a minimal test initializer for the
//! global logger. Backends are installed by the application; until then the
//! macros are silent.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! calc_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: "imagecost", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! calc_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "imagecost", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! calc_info {
    ($($arg:tt)*) => {{
        log::info!(target: "imagecost", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! calc_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "imagecost", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! calc_error {
    ($($arg:tt)*) => {{
        log::error!(target: "imagecost", $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Debug builds log at debug level, release builds at info.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
