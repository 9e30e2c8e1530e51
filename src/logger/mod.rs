//! Structured logging for the token tracing client
//!
//! Provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug)
//! - Per-module debug control via --debug-<module> flags
//! - Colored console output
//!
//! ## Usage
//!
//! ```rust
//! use tokentracer::logger::{self, LogTag};
//!
//! logger::info(LogTag::Rpc, "Connection established");
//! logger::error(LogTag::Wallet, "Failed to load payer keypair");
//! logger::debug(LogTag::Swap, "Payload bytes: ..."); // Only with --debug-swap
//! logger::log(LogTag::System, "STARTUP", "Client starting");
//! ```

mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

use crate::arguments::{has_arg, is_verbose_enabled};

/// Check if a log message should be displayed
///
/// Errors and warnings are always shown. Debug lines require the
/// matching --debug-<module> flag or --verbose.
fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    match level {
        LogLevel::Error | LogLevel::Warning | LogLevel::Info => true,
        LogLevel::Debug => {
            is_verbose_enabled() || has_arg(&format!("--debug-{}", tag.to_debug_key()))
        }
    }
}

/// Log with an explicit event column, e.g. `log(LogTag::Rpc, "SEND", "...")`.
/// Events are free-form; "ERROR"/"WARNING"/"SUCCESS" get level colors.
pub fn log(tag: LogTag, event: &str, message: &str) {
    let level = match event.to_uppercase().as_str() {
        "ERROR" => LogLevel::Error,
        "WARNING" => LogLevel::Warning,
        "DEBUG" => LogLevel::Debug,
        _ => LogLevel::Info,
    };
    if !should_log(&tag, level) {
        return;
    }
    format::format_and_log(tag, event, message);
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    log(tag, "ERROR", message);
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    log(tag, "WARNING", message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    log(tag, "INFO", message);
}

/// Log at DEBUG level - only shown when --debug-<module> is provided
pub fn debug(tag: LogTag, message: &str) {
    log(tag, "DEBUG", message);
}
