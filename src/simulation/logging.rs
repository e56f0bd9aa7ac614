//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulator. All
//! diagnostics go to stderr (and optionally a daily rolling file) so stdout stays a
//! clean stream of JSON snapshots.

use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Error returned when the global subscriber cannot be installed
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting on the console
    pub json_format: bool,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

/// Keeps the file writer flushing until dropped
#[derive(Debug, Default)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "park-ops-sim".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching the binary's `--verbose`, `--debug` and `--log-dir` flags
    ///
    /// `--debug` wins over `--verbose`; with neither only warnings are shown. A log
    /// directory adds a daily rolling JSON file next to the console output.
    pub fn for_cli(verbose: bool, debug: bool, log_dir: Option<&str>) -> Self {
        let config = if debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if verbose {
            Self::new().with_level(Level::INFO).with_span_events()
        } else {
            Self::new().with_level(Level::WARN)
        };

        match log_dir {
            Some(directory) => config.with_file_logging(directory),
            None => config,
        }
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive used when neither `with_env_filter` nor `RUST_LOG` is set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// Hold the returned guard for the life of the process when file logging is on.
    pub fn init(self) -> Result<LoggingGuard, LoggingInitError> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(self.default_directive()))?,
        };

        let (file_layer, file_guard) = if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let (writer, guard) = non_blocking(rolling::daily(log_dir, &self.log_file_prefix));
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_span_events(self.span_events());
            (Some(layer), Some(guard))
        } else {
            (None, None)
        };

        let json_console = self.json_format.then(|| {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
        });
        let pretty_console = (!self.json_format).then(|| {
            fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
        });

        Registry::default()
            .with(env_filter)
            .with(file_layer)
            .with(json_console)
            .with(pretty_console)
            .try_init()?;

        info!(level = %self.level, json = self.json_format, file = self.log_to_file, "Logging initialized");
        Ok(LoggingGuard { _file: file_guard })
    }
}

/// Structured log event tagged with the emitting component
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $component:expr, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            message = $message,
            component = $component,
            $($key = $value,)*
        );
    };
    ($level:ident, $component:expr, $message:expr) => {
        tracing::$level!(
            message = $message,
            component = $component,
        );
    };
}

/// Span for timing a unit of work
#[macro_export]
macro_rules! perf_span {
    ($name:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info_span!(
            $name,
            component = "performance",
            $($key = $value,)*
        )
    };
    ($name:expr) => {
        tracing::info_span!(
            $name,
            component = "performance",
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_logging_config_creation() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json_format);
        assert!(!config.log_to_file);
        assert!(config.log_directory.is_none());
        assert_eq!(config.log_file_prefix, "park-ops-sim");
        assert!(!config.enable_span_events);
        assert!(config.enable_ansi);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_logging_config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("test_logs")
            .with_file_prefix("test_prefix")
            .with_span_events()
            .without_ansi()
            .with_env_filter("debug");

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert!(config.log_to_file);
        assert_eq!(config.log_directory, Some("test_logs".to_string()));
        assert_eq!(config.log_file_prefix, "test_prefix");
        assert!(config.enable_span_events);
        assert!(!config.enable_ansi);
        assert_eq!(config.env_filter, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_presets() {
        assert_eq!(LoggingConfig::for_cli(false, false, None).level, Level::WARN);
        assert_eq!(LoggingConfig::for_cli(true, false, None).level, Level::INFO);
        assert_eq!(LoggingConfig::for_cli(true, true, None).level, Level::DEBUG);
        assert!(LoggingConfig::for_cli(false, true, None).enable_span_events);
        assert!(!LoggingConfig::for_cli(true, false, None).log_to_file);
    }

    #[test]
    fn test_cli_log_dir_enables_file_logging() {
        let config = LoggingConfig::for_cli(false, false, Some("run_logs"));
        assert!(config.log_to_file);
        assert_eq!(config.log_directory, Some("run_logs".to_string()));
        assert_eq!(config.level, Level::WARN);
    }

    #[test]
    fn test_default_directive_targets_this_crate() {
        let config = LoggingConfig::new().with_level(Level::WARN);
        assert_eq!(config.default_directive(), "park_ops_sim=WARN");
    }
}
