// logging.rs
// Simple logging utility for the bingo binaries. Log lines are written
// around the interactive screen phase, never while it is being redrawn.

use chrono::Local;

/// Log level enum
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Error,
    Warning,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format and print a log message with timestamp
pub fn log_message(level: LogLevel, message: &str) {
    println!("{} - {} - {}", timestamp(), level.as_str(), message);
}

/// Log an info message
pub fn log_info(message: &str) {
    log_message(LogLevel::Info, message);
}

/// Log a warning message
pub fn log_warning(message: &str) {
    log_message(LogLevel::Warning, message);
}

/// Format and print an error log message to stderr with timestamp
pub fn log_error_stderr(message: &str) {
    eprintln!("{} - {} - {}", timestamp(), LogLevel::Error.as_str(), message);
}
