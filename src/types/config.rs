//! Configuration structures for the park telemetry simulator
//!
//! This module contains the simulation configuration structure and validation logic.
//! Values are layered: built-in defaults, then an optional JSON file, then command
//! line arguments.

use super::Language;
use crate::catalog::{AttractionSpec, CatalogError, ParkCatalog, ZoneSpec};
use chrono::{DateTime, FixedOffset};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default seconds between dashboard refreshes
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Attraction whose queue history the dashboard charts by default
pub const DEFAULT_HISTORY_ATTRACTION: &str = "coaster";

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "park-ops-sim",
    version,
    about = "Park Ops Simulator - Generates synthetic theme park operations telemetry",
    long_about = "Generates the live telemetry a theme park operations dashboard polls: attraction queues and wait times, zone occupancy, park-wide visitor totals, queue history, alerts and recommendations. Each tick prints one JSON snapshot per line on stdout.

EXAMPLES:
    # One snapshot with default settings
    park-ops-sim

    # Poll twelve times, one second apart, reproducibly
    park-ops-sim --ticks 12 --poll-interval-secs 1 --seed 42

    # Replay a fixed moment of the day
    park-ops-sim --start-time 2024-07-01T13:00:00+08:00 --seed 7

    # Use a configuration file with a custom catalog
    park-ops-sim --config park.json

    # Generate configuration template
    park-ops-sim --print-config > park.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Number of dashboard ticks to generate
    #[arg(
        long,
        help = "Number of snapshots to generate",
        long_help = "Number of dashboard refreshes to simulate. Must be greater than 0. Default: 1"
    )]
    pub ticks: Option<usize>,

    /// Seconds between ticks
    #[arg(
        long,
        help = "Seconds between snapshots",
        long_help = "Wall-clock seconds to wait between dashboard refreshes. Must be greater than 0. Default: 10"
    )]
    pub poll_interval_secs: Option<u64>,

    /// Attraction charted in the queue history
    #[arg(long, help = "Attraction id for the queue history series")]
    pub history_attraction: Option<String>,

    /// Language for the stderr summary line
    #[arg(long, help = "Summary language (zh or en)")]
    pub language: Option<Language>,

    /// Pin the simulated clock
    #[arg(
        long,
        help = "Pin the clock to an RFC 3339 timestamp",
        long_help = "Start the simulated clock at this RFC 3339 timestamp instead of the local time. The pinned clock advances by the poll interval each tick."
    )]
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Directory for a daily rolling JSON log file
    #[arg(
        long,
        help = "Also write JSON logs to a daily rolling file in this directory"
    )]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Number of dashboard ticks to generate
    pub ticks: Option<usize>,

    /// Seconds between ticks
    pub poll_interval_secs: Option<u64>,

    /// Attraction charted in the queue history
    pub history_attraction: Option<String>,

    /// Language for human-readable summaries
    pub language: Option<Language>,

    /// Pinned start of the simulated clock
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Replacement attraction list
    pub attractions: Option<Vec<AttractionSpec>>,

    /// Replacement zone list
    pub zones: Option<Vec<ZoneSpec>>,
}

/// Configuration for the park telemetry simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Number of dashboard ticks to generate
    pub ticks: usize,

    /// Seconds between ticks
    pub poll_interval_secs: u64,

    /// Attraction charted in the queue history
    pub history_attraction: String,

    /// Language for human-readable summaries
    pub language: Language,

    /// Pinned start of the simulated clock; local time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Attractions and zones
    #[serde(flatten)]
    pub catalog: ParkCatalog,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Tick count is invalid
    #[error("Tick count must be greater than 0, got {0}")]
    InvalidTickCount(usize),

    /// Poll interval is invalid
    #[error("Poll interval must be greater than 0 seconds, got {0}")]
    InvalidPollInterval(u64),

    /// History attraction is not in the catalog
    #[error("History attraction {0} is not in the catalog")]
    UnknownHistoryAttraction(String),

    /// Catalog is inconsistent
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: 1,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            history_attraction: DEFAULT_HISTORY_ATTRACTION.to_string(),
            language: Language::default(),
            start_time: None,
            catalog: ParkCatalog::default(),
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            seed: config_file.seed.or(defaults.seed),
            ticks: config_file.ticks.unwrap_or(defaults.ticks),
            poll_interval_secs: config_file
                .poll_interval_secs
                .unwrap_or(defaults.poll_interval_secs),
            history_attraction: config_file
                .history_attraction
                .unwrap_or(defaults.history_attraction),
            language: config_file.language.unwrap_or(defaults.language),
            start_time: config_file.start_time.or(defaults.start_time),
            catalog: ParkCatalog::new(
                config_file.attractions.unwrap_or(defaults.catalog.attractions),
                config_file.zones.unwrap_or(defaults.catalog.zones),
            ),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.ticks {
            config.ticks = value;
        }
        if let Some(value) = args.poll_interval_secs {
            config.poll_interval_secs = value;
        }
        if let Some(value) = args.history_attraction {
            config.history_attraction = value;
        }
        if let Some(value) = args.language {
            config.language = value;
        }
        if let Some(value) = args.start_time {
            config.start_time = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.ticks == 0 {
            return Err(ConfigValidationError::InvalidTickCount(self.ticks));
        }

        if self.poll_interval_secs == 0 {
            return Err(ConfigValidationError::InvalidPollInterval(self.poll_interval_secs));
        }

        self.catalog.validate()?;

        if !self.catalog.contains_attraction(&self.history_attraction) {
            return Err(ConfigValidationError::UnknownHistoryAttraction(
                self.history_attraction.clone(),
            ));
        }

        Ok(())
    }

    /// Poll interval as a duration
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}
