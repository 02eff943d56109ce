use chrono::{Local, NaiveDate};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR: &str = "wordle-engine";
const DEFAULT_FILTER: &str = "warn";

/// Where log records are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// A dated file under the user cache directory; keeps the TUI screen clean.
    File,
}

#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    format!("wordle-{}.log", date.format("%Y-%m-%d"))
}

#[must_use]
pub fn log_file_path(date: NaiveDate) -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(log_file_name(date))
}

/// Install the global logger. Filtering follows `RUST_LOG`, default `warn`.
///
/// Returns the log file path when logging to a file.
pub fn init_logging(target: LogTarget) -> io::Result<Option<PathBuf>> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = match target {
        LogTarget::Stderr => {
            builder.target(env_logger::Target::Stderr);
            None
        }
        LogTarget::File => {
            let path = log_file_path(Local::now().date_naive());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            Some(path)
        }
    };

    // A logger may already be installed (tests, embedding); keep it.
    let _ = builder.try_init();
    Ok(path)
}
