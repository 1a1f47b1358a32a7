//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that works alongside the
//! standard log crate. The CLI installs it when a log file is requested
//! and falls back to env_logger otherwise.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// File logger that also echoes records to the console
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that gets written
    level: Level,
}

impl Logger {
    /// Creates a new logger writing records up to `level`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level that gets written
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: Level) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: Level) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    /// Install env_logger as the global `log` backend
    ///
    /// `RUST_LOG` wins over the default level when set.
    pub fn init_console_logger(default_level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(default_level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // console output goes to stderr so node results stay parseable on stdout
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
