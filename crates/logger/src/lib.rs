//! Leveled logger for the `gangnamapt` CLI.
//!
//! - `warn!` and `error!` always emit (stderr).
//! - `info!` requires the `log-info` feature (stdout).
//! - `debug!` requires the `log-debug` feature and the runtime debug flag (stdout).
//! - `verbose!` requires the `verbose` feature and the runtime verbose flag. It
//!   prints the bare message and never reaches the log file.
//! - With `file-logging`, an initialized log file replaces the console sink for
//!   tagged messages.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

/// Logging levels, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires `log-info`).
    Info = 3,
    /// Debug-level messages (requires `log-debug` and the runtime flag).
    Debug = 4,
}

impl Level {
    /// Lowercase name, as stored in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Bracketed tag written in front of each message.
    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("Unknown log level: '{s}'")),
        }
    }
}

/// Level used before anything calls [`set_level`].
const fn default_level() -> Level {
    if cfg!(feature = "log-debug") {
        Level::Debug
    } else if cfg!(feature = "log-info") {
        Level::Info
    } else {
        Level::Warn
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level() as u8);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "log-debug"));
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current global log level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::SeqCst))
}

/// Parse and set the level from a string (case-insensitive). Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Enable `debug!` output at runtime (no effect without `log-debug`).
pub fn enable_debug() {
    DEBUG_ENABLED.store(cfg!(feature = "log-debug"), Ordering::SeqCst);
}

/// Disable `debug!` output at runtime.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `debug!` output is enabled.
#[must_use]
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Enable `verbose!` output at runtime (no effect without `verbose`).
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(cfg!(feature = "verbose"), Ordering::SeqCst);
}

/// Disable `verbose!` output at runtime.
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` output is enabled.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Route tagged messages to `path` (appending). Returns true on success.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };
    LOG_FILE.lock().map(|mut slot| *slot = Some(file)).is_ok()
}

/// Route tagged messages to `path`. Always false without `file-logging`.
#[cfg(not(feature = "file-logging"))]
#[must_use]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Stop writing to the log file and go back to the console.
#[cfg(feature = "file-logging")]
pub fn close_file_logging() {
    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = None;
    }
}

/// Stop writing to the log file (no-op without `file-logging`).
#[cfg(not(feature = "file-logging"))]
pub fn close_file_logging() {}

/// Try the file sink. Returns false when no log file is active.
#[cfg(feature = "file-logging")]
fn write_to_file(line: &str) -> bool {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return false;
    };
    match slot.as_mut() {
        Some(file) => {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
            true
        }
        None => false,
    }
}

#[cfg(not(feature = "file-logging"))]
const fn write_to_file(_line: &str) -> bool {
    false
}

fn should_log(level: Level) -> bool {
    let compiled_in = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    compiled_in && level <= self::level()
}

/// Dispatch used by the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_to_file(&line) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Dispatch used by `verbose!`. Console only.
pub fn verbose_impl(args: Arguments) {
    if cfg!(feature = "verbose") && is_verbose_enabled() {
        println!("{args}");
    }
}

/// Logs an error-level message (always enabled).
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

/// Logs a warning-level message (always enabled).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

/// Logs an info-level message (requires `log-info`).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

/// Logs a debug-level message (requires `log-debug` and the runtime flag).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

/// Prints an untagged message when verbose output is on. Never written to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => { $crate::verbose_impl(format_args!($($arg)*)) };
}
