//! Tests for CLI argument parsing and configuration layering
//!
//! These tests verify that command line arguments are parsed, layered over a config
//! file and the defaults, and validated.

use clap::Parser;
use park_ops_sim::types::config::{CliArgs, ConfigValidationError, SimulationConfig};
use park_ops_sim::types::Language;
use std::io::Write;
use tempfile::Builder;

/// Test default values when no flags are given
#[test]
fn test_no_flags() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.config.is_none());
    assert!(cli_args.ticks.is_none());
    assert!(!cli_args.verbose);
    assert!(!cli_args.debug);
    assert!(!cli_args.dry_run);
    assert!(!cli_args.print_config);

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.ticks, 1);
    assert_eq!(config.poll_interval_secs, 10);
    config.validate().unwrap();
}

/// Test short and long logging flags
#[test]
fn test_logging_flags() {
    let cli_args = CliArgs::try_parse_from(["test", "-v", "-d", "--dry-run"]).unwrap();
    assert!(cli_args.verbose);
    assert!(cli_args.debug);
    assert!(cli_args.dry_run);

    let cli_args = CliArgs::try_parse_from(["test", "--print-config"]).unwrap();
    assert!(cli_args.print_config);
    assert!(cli_args.log_dir.is_none());

    let cli_args = CliArgs::try_parse_from(["test", "--log-dir", "run_logs"]).unwrap();
    assert_eq!(cli_args.log_dir.as_deref(), Some("run_logs"));
}

/// Test numeric flags and their validation
#[test]
fn test_tick_and_interval_flags() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--ticks", "30", "--poll-interval-secs", "5"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.ticks, 30);
    assert_eq!(config.poll_interval().as_secs(), 5);

    // Zero parses but fails validation
    let cli_args = CliArgs::try_parse_from(["test", "--ticks", "0"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTickCount(0)));

    let cli_args = CliArgs::try_parse_from(["test", "--poll-interval-secs", "0"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPollInterval(0)));

    assert!(CliArgs::try_parse_from(["test", "--ticks", "-1"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--ticks", "many"]).is_err());
}

/// Test language parsing accepts the aliases
#[test]
fn test_language_flag() {
    for (value, expected) in [("zh", Language::Zh), ("EN", Language::En), ("chinese", Language::Zh)] {
        let cli_args = CliArgs::try_parse_from(["test", "--language", value]).unwrap();
        assert_eq!(cli_args.language, Some(expected));
    }
}

/// Test unknown history attraction fails validation
#[test]
fn test_history_attraction_flag() {
    let cli_args = CliArgs::try_parse_from(["test", "--history-attraction", "teacup"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    config.validate().unwrap();

    let cli_args = CliArgs::try_parse_from(["test", "--history-attraction", "log-flume"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::UnknownHistoryAttraction(_))
    ));
}

/// Test that CLI flags win over the config file, which wins over defaults
#[test]
fn test_layering_precedence() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    temp_file
        .write_all(br#"{ "ticks": 8, "poll_interval_secs": 2, "history_attraction": "ferris" }"#)
        .unwrap();
    temp_file.flush().unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();

    let cli_args =
        CliArgs::try_parse_from(["test", "--config", path.as_str(), "--ticks", "3"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.ticks, 3);
    assert_eq!(config.poll_interval_secs, 2);
    assert_eq!(config.history_attraction, "ferris");
    assert_eq!(config.language, Language::En);
}

/// Test a config file whose catalog references a missing zone
#[test]
fn test_config_file_with_broken_catalog() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    let config_json = r#"{
        "zones": [
            { "id": "family", "name": { "zh": "亲子区", "en": "Family Zone" }, "capacity": 4000 }
        ],
        "attractions": [
            {
                "id": "coaster",
                "name": { "zh": "高空过山车", "en": "Sky Coaster" },
                "icon": "🎢",
                "zone": "thrill",
                "capacity": 24,
                "status": "operating",
                "throughput_per_hour": 720,
                "position": { "x": 25.0, "y": 20.0 }
            }
        ]
    }"#;
    temp_file.write_all(config_json.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = SimulationConfig::from_file(temp_file.path()).unwrap();
    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigValidationError::Catalog(_)));
    assert!(error.to_string().contains("thrill"));
}
