//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a shared buffer for display in the UI.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Maximum number of log lines kept for display.
///
pub const MAX_LOG_ENTRIES: usize = 500;

/// Shared buffer of formatted log lines.
///
pub type LogBuffer = Arc<Mutex<Vec<String>>>;

/// Return a new empty log buffer.
///
pub fn new_log_buffer() -> LogBuffer {
    Arc::new(Mutex::new(Vec::new()))
}

/// Append a line to the buffer, dropping the oldest lines beyond the limit.
///
pub fn append_log(buffer: &LogBuffer, line: String) {
    if let Ok(mut entries) = buffer.lock() {
        entries.push(line);
        if entries.len() > MAX_LOG_ENTRIES {
            let overflow = entries.len() - MAX_LOG_ENTRIES;
            entries.drain(..overflow);
        }
    }
}

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Return a logger that appends every record to the given buffer.
    ///
    pub fn to_buffer(level: LevelFilter, buffer: LogBuffer) -> Self {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |line| append_log(&buffer, line)));
        logger
    }

    /// Install this logger as the global `log` backend.
    ///
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}
