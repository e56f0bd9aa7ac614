//! Error types and handling
//!
//! This module contains error types for the fallible edges of the simulator:
//! configuration, catalog validation and snapshot output. The generators themselves
//! never fail.

use crate::catalog::CatalogError;
use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while setting up or driving a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Catalog validation failed
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        match error {
            ConfigValidationError::Catalog(catalog) => SimulationError::CatalogError(catalog),
            other => SimulationError::ConfigurationError(other.to_string()),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// Configuration and catalog errors are fixed at startup; output errors may clear
    /// on the next tick unless the reader has gone away.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::ConfigurationError(_) => false,
            SimulationError::CatalogError(_) => false,
            SimulationError::IoError(e) => e.kind() != std::io::ErrorKind::BrokenPipe,
            SimulationError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::CatalogError(_) => "Catalog",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZoneId;
    use std::io;

    #[test]
    fn test_error_creation() {
        let error = SimulationError::configuration_error("Invalid config");
        assert!(matches!(error, SimulationError::ConfigurationError(_)));
        assert_eq!(error.to_string(), "Configuration validation failed: Invalid config");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::Interrupted, "write interrupted");
        let error: SimulationError = io_error.into();
        assert!(matches!(error, SimulationError::IoError(_)));
        assert!(error.is_recoverable());

        let error: SimulationError = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert_eq!(error.category(), "IO");
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_catalog_errors_keep_their_variant() {
        let error: SimulationError =
            ConfigValidationError::Catalog(CatalogError::DuplicateZone(ZoneId::new("food"))).into();
        assert!(matches!(error, SimulationError::CatalogError(CatalogError::DuplicateZone(_))));
        assert_eq!(error.category(), "Catalog");
        assert!(!error.is_recoverable());

        let error: SimulationError = ConfigValidationError::InvalidTickCount(0).into();
        assert!(matches!(error, SimulationError::ConfigurationError(_)));
    }

    #[test]
    fn test_error_categories() {
        let cases = vec![
            (SimulationError::configuration_error("x"), "Configuration", false),
            (SimulationError::CatalogError(CatalogError::NoZones), "Catalog", false),
            (SimulationError::IoError(io::Error::new(io::ErrorKind::Other, "x")), "IO", true),
        ];

        for (error, category, recoverable) in cases {
            assert_eq!(error.category(), category);
            assert_eq!(error.is_recoverable(), recoverable);
        }
    }
}
