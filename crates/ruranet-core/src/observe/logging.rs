//! # Structured Logging
//!
//! Logging setup for the `tracing` ecosystem:
//!
//! - Multiple output formats (JSON, Pretty, Compact)
//! - Log level filtering, overridable with `RUST_LOG`
//! - Stderr or file output
//!
//! ## Example
//!
//! ```rust,ignore
//! use ruranet_core::observe::{init_logging, LogConfig, LogFormat, LogLevel};
//!
//! let config = LogConfig {
//!     level: LogLevel::Debug,
//!     format: LogFormat::Json,
//!     ..Default::default()
//! };
//!
//! init_logging(&config);
//!
//! tracing::info!(points = 1257, "Sweep complete");
//! ```

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (every skipped grid point)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!(
                "unknown log level '{}', expected trace, debug, info, warn or error",
                other
            )),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (machine-readable)
    Json,
    /// Pretty format (human-readable, colored)
    #[default]
    Pretty,
    /// Compact format (minimal, one line per event)
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Log file path, appended to (None for stderr)
    pub file: Option<PathBuf>,
    /// Include timestamps
    pub timestamps: bool,
    /// Include source location (file:line)
    pub source_location: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include thread names
    pub thread_names: bool,
    /// Include span events (enter/exit)
    pub span_events: bool,
    /// Module filter (e.g., "ruranet_core=debug,ruranet_sim=trace")
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            file: None,
            timestamps: true,
            source_location: false,
            thread_ids: false,
            thread_names: false,
            span_events: false,
            filter: None,
        }
    }
}

impl LogConfig {
    /// Create a development configuration (verbose, pretty).
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            source_location: true,
            thread_names: true,
            span_events: true,
            ..Default::default()
        }
    }

    /// Create a production configuration (JSON, minimal).
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            timestamps: true,
            ..Default::default()
        }
    }

    /// Create a quiet configuration (errors only).
    pub fn quiet() -> Self {
        Self {
            level: LogLevel::Error,
            format: LogFormat::Compact,
            timestamps: false,
            ..Default::default()
        }
    }

    /// Preset by name: `development`, `production` or `quiet`.
    pub fn preset(name: &str) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::development()),
            "production" | "prod" => Ok(Self::production()),
            "quiet" => Ok(Self::quiet()),
            other => Err(format!(
                "unknown log preset '{}', expected development, production or quiet",
                other
            )),
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Filter directive: the custom filter if it parses, else `RUST_LOG`,
    /// else the configured level.
    fn env_filter(&self) -> EnvFilter {
        if let Some(ref custom) = self.filter {
            EnvFilter::try_new(custom).unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
        } else {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
        }
    }

    fn writer(&self) -> BoxMakeWriter {
        match &self.file {
            Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
                Err(e) => {
                    eprintln!("cannot open log file {}: {}; logging to stderr", path.display(), e);
                    BoxMakeWriter::new(std::io::stderr)
                }
            },
            None => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

/// Initialize the global logging subscriber.
///
/// This should be called once at application startup. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
///
/// # Example
///
/// ```rust,ignore
/// use ruranet_core::observe::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::default());
///
/// tracing::info!("Application started");
/// ```
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = config.env_filter();
    let writer = config.writer();

    let span_events = if config.span_events {
        fmt::format::FmtSpan::FULL
    } else {
        fmt::format::FmtSpan::NONE
    };

    macro_rules! boxed {
        ($layer:expr) => {{
            let layer = $layer
                .with_writer(writer)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_thread_ids(config.thread_ids)
                .with_thread_names(config.thread_names)
                .with_span_events(span_events);
            if config.timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }};
    }

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => boxed!(fmt::layer().json()),
        LogFormat::Pretty => boxed!(fmt::layer().pretty()),
        LogFormat::Compact => boxed!(fmt::layer().compact()),
    };

    let subscriber = tracing_subscriber::registry().with(layer).with(filter);
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
