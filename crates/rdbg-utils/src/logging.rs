//! # Logging Utilities
//!
//! Logging infrastructure for rdbg using `tracing`.
//!
//! Binaries embedding the host layer call one of the init functions once at
//! startup; library crates only emit through the `tracing` macros and work
//! fine with no subscriber installed (events become no-ops).
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: level filter (e.g. `debug`, `rdbg_host=trace`)
//! - `RDBG_LOG_FORMAT`: output format (`json` or `pretty`, default: `pretty`)
//! - `RDBG_LOG_FILE`: optional path; when set, a non-blocking file layer is
//!   added next to the console layer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! rdbg_utils::init_logging().expect("Failed to initialize logging");
//! tracing::info!("debugger starting");
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io, mem};

use tracing::Level;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

/// Initialize logging from the environment.
///
/// Reads `RUST_LOG` for the level filter, `RDBG_LOG_FORMAT` for the output
/// format, and `RDBG_LOG_FILE` for an optional file layer.
///
/// ## Errors
///
/// Fails when a subscriber is already installed or the log file cannot be
/// created.
pub fn init_logging() -> Result<(), LoggingError>
{
    let format = env::var("RDBG_LOG_FORMAT")
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or(LogFormat::Pretty);

    let default_level = env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .parse::<LogLevel>()
        .map(Into::into)
        .unwrap_or(Level::INFO);

    install(format, default_level)
}

/// Initialize logging with an explicit level and format.
///
/// `RUST_LOG`, when set, still overrides the level with more specific
/// per-module filters.
///
/// ## Errors
///
/// Same as [`init_logging`].
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<(), LoggingError>
{
    install(format, level.into())
}

fn install(format: LogFormat, default_level: Level) -> Result<(), LoggingError>
{
    let file_writer = file_writer_from_env()?;

    let result = match format {
        LogFormat::Pretty => {
            let console = fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(env_filter(default_level));
            if let Some(writer) = file_writer {
                let file = fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false) // No ANSI in files
                    .with_filter(env_filter(default_level));
                Registry::default().with(console).with(file).try_init()
            } else {
                Registry::default().with(console).try_init()
            }
        }
        LogFormat::Json => {
            let console = fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(io::stderr)
                .with_filter(env_filter(default_level));
            if let Some(writer) = file_writer {
                let file = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(env_filter(default_level));
                Registry::default().with(console).with(file).try_init()
            } else {
                Registry::default().with(console).try_init()
            }
        }
    };

    result.map_err(|err| LoggingError::InitializationFailed(err.to_string()))
}

/// Build the level filter, letting `RUST_LOG` override the default.
fn env_filter(default_level: Level) -> EnvFilter
{
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}

/// Build the non-blocking file writer when `RDBG_LOG_FILE` is set.
fn file_writer_from_env() -> Result<Option<NonBlocking>, LoggingError>
{
    let Some(path) = env::var_os("RDBG_LOG_FILE").map(PathBuf::from) else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(LoggingError::FileError)?;

    let appender =
        tracing_appender::rolling::never(dir, path.file_name().unwrap_or_else(|| OsStr::new("rdbg.log")));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    // The guard flushes on drop; logging lives as long as the process does.
    mem::forget(guard);
    Ok(Some(non_blocking))
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Failed to install the subscriber (usually: already initialized)
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("prod").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }
}
