//! Core types and identifiers for the park telemetry simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: slug-based identifiers for attractions, zones and alerts
//! - **Enums**: crowd levels, attraction statuses, alert severities and languages
//! - **Text**: bilingual labels carried as data
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use park_ops_sim::types::*;
//!
//! let id = AttractionId::new("coaster");
//! assert_eq!(id.as_str(), "coaster");
//!
//! let label = LocalizedText::new("高空过山车", "Sky Coaster");
//! assert_eq!(label.get(Language::Zh), "高空过山车");
//!
//! let config = SimulationConfig { ticks: 3, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod text;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use text::*;
