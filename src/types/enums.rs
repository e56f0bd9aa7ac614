//! Enumeration types for the park telemetry simulator
//!
//! This module contains all enumeration types used throughout the simulation system,
//! including crowd levels, attraction statuses, alert severities, suggestion priorities
//! and display languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal crowd classification of a utilization ratio
///
/// Variants are declared in increasing severity so that `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    /// Utilization below 40%
    Low,
    /// Utilization from 40% up to 65%
    Medium,
    /// Utilization from 65% up to 85%
    High,
    /// Utilization at or above 85%, including oversubscription
    Critical,
}

impl CrowdLevel {
    /// All levels in increasing severity
    pub const ALL: [CrowdLevel; 4] =
        [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High, CrowdLevel::Critical];
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrowdLevel::Low => write!(f, "Low"),
            CrowdLevel::Medium => write!(f, "Medium"),
            CrowdLevel::High => write!(f, "High"),
            CrowdLevel::Critical => write!(f, "Critical"),
        }
    }
}

impl FromStr for CrowdLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(CrowdLevel::Low),
            "medium" | "med" => Ok(CrowdLevel::Medium),
            "high" => Ok(CrowdLevel::High),
            "critical" => Ok(CrowdLevel::Critical),
            _ => Err(format!("Unknown crowd level: {}", s)),
        }
    }
}

/// Operating status of an attraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttractionStatus {
    /// Open and loading guests
    Operating,
    /// Temporarily down for maintenance
    Maintenance,
    /// Closed for the day
    Closed,
}

impl fmt::Display for AttractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttractionStatus::Operating => write!(f, "Operating"),
            AttractionStatus::Maintenance => write!(f, "Maintenance"),
            AttractionStatus::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for AttractionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operating" | "open" => Ok(AttractionStatus::Operating),
            "maintenance" => Ok(AttractionStatus::Maintenance),
            "closed" => Ok(AttractionStatus::Closed),
            _ => Err(format!("Unknown attraction status: {}", s)),
        }
    }
}

/// Severity of an operational alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Needs immediate action
    Critical,
    /// Needs attention soon
    Warning,
    /// Informational recommendation
    Info,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Critical => write!(f, "Critical"),
            AlertSeverity::Warning => write!(f, "Warning"),
            AlertSeverity::Info => write!(f, "Info"),
        }
    }
}

/// Priority tag attached to an operational suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    /// Act on this first
    High,
    /// Act on this when possible
    Medium,
    /// Nice to have
    Low,
}

impl fmt::Display for SuggestionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionPriority::High => write!(f, "High"),
            SuggestionPriority::Medium => write!(f, "Medium"),
            SuggestionPriority::Low => write!(f, "Low"),
        }
    }
}

/// What a camera mounted at an attraction is pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraPurpose {
    /// Queue line monitoring
    Queue,
    /// General crowd density
    Crowd,
    /// Safety observation
    Safety,
}

/// Display language of a bilingual label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese
    Zh,
    /// English
    #[default]
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Zh => write!(f, "zh"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Language::Zh),
            "en" | "en-us" | "english" => Ok(Language::En),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crowd_level_ordering_follows_severity() {
        assert!(CrowdLevel::Low < CrowdLevel::Medium);
        assert!(CrowdLevel::Medium < CrowdLevel::High);
        assert!(CrowdLevel::High < CrowdLevel::Critical);
    }

    #[test]
    fn test_crowd_level_parsing() {
        for level in CrowdLevel::ALL {
            let parsed: CrowdLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
        assert!("packed".parse::<CrowdLevel>().is_err());
    }

    #[test]
    fn test_enum_serialization_is_lowercase() {
        assert_eq!(serde_json::to_string(&CrowdLevel::Critical).unwrap(), "\"critical\"");
        assert_eq!(serde_json::to_string(&AttractionStatus::Maintenance).unwrap(), "\"maintenance\"");
        assert_eq!(serde_json::to_string(&AlertSeverity::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&SuggestionPriority::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&CameraPurpose::Safety).unwrap(), "\"safety\"");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("English".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_attraction_status_parsing() {
        assert_eq!("open".parse::<AttractionStatus>().unwrap(), AttractionStatus::Operating);
        assert_eq!("Closed".parse::<AttractionStatus>().unwrap(), AttractionStatus::Closed);
        assert!("broken".parse::<AttractionStatus>().is_err());
    }
}
