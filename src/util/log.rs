//! File-based logging for the dashboard.
//!
//! The terminal belongs to the TUI, so every line goes to one file per
//! severity under the configured log directory. Nothing is written until
//! [`init`] has been called.
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

pub static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the global logger. Later calls keep the first logger.
pub fn init(log_dir: impl AsRef<Path>, debug_enabled: bool) -> std::io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new(log_dir, debug_enabled)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Writes timestamped lines to `error.log`, `warn.log`, `info.log` and `debug.log`.
#[derive(Debug)]
pub struct Logger {
    debug_enabled: bool,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl Logger {
    /// Create the directory and truncate the four files.
    pub fn new(log_dir: impl AsRef<Path>, debug_enabled: bool) -> std::io::Result<Self> {
        let log_dir = log_dir.as_ref();
        create_dir_all(log_dir)?;

        let open = |level: LogLevel| File::create(log_dir.join(level.filename())).map(Mutex::new);

        Ok(Self {
            error_file: open(LogLevel::Error)?,
            warn_file: open(LogLevel::Warn)?,
            info_file: open(LogLevel::Info)?,
            debug_file: open(LogLevel::Debug)?,
            debug_enabled,
        })
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn write_log(&self, level: LogLevel, message: &str) {
        if level == LogLevel::Debug && !self.debug_enabled {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.write_log($crate::util::log::LogLevel::Error, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.write_log($crate::util::log::LogLevel::Warn, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.write_log($crate::util::log::LogLevel::Info, &format!($($arg)*));
        }
    }};
}

/// Skips formatting entirely unless debug logging is on.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            if logger.debug_enabled() {
                logger.write_log($crate::util::log::LogLevel::Debug, &format!($($arg)*));
            }
        }
    }};
}
