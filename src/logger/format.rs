//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with tag and event formatting
//! - Broken pipe handling for piped commands

use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 8;
const EVENT_WIDTH: usize = 10;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, event: &str, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let prefix = format!("{} ", time).dimmed();

    let tag_str = format_tag(&tag);
    let event_str = format_event(event);

    let line = format!("{}[{}] [{}] {}", prefix, tag_str, event_str, message);
    print_stdout_safe(&line);
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    match tag {
        LogTag::System => format!("{:<width$}", "SYSTEM", width = TAG_WIDTH)
            .bright_yellow()
            .bold(),
        LogTag::Rpc => format!("{:<width$}", "RPC", width = TAG_WIDTH)
            .bright_cyan()
            .bold(),
        LogTag::Wallet => format!("{:<width$}", "WALLET", width = TAG_WIDTH)
            .bright_magenta()
            .bold(),
        LogTag::Program => format!("{:<width$}", "PROGRAM", width = TAG_WIDTH)
            .bright_blue()
            .bold(),
        LogTag::Swap => format!("{:<width$}", "SWAP", width = TAG_WIDTH)
            .bright_green()
            .bold(),
    }
}

/// Format the event column with appropriate color
fn format_event(event: &str) -> ColoredString {
    match event.to_uppercase().as_str() {
        "ERROR" => format!("{:<width$}", event, width = EVENT_WIDTH)
            .bright_red()
            .bold(),
        "WARNING" => format!("{:<width$}", event, width = EVENT_WIDTH)
            .bright_yellow()
            .bold(),
        "SUCCESS" => format!("{:<width$}", event, width = EVENT_WIDTH)
            .bright_green()
            .bold(),
        _ => format!("{:<width$}", event, width = EVENT_WIDTH)
            .white()
            .bold(),
    }
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    if let Err(e) = writeln!(stdout(), "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
    if let Err(e) = stdout().flush() {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}
