//! Crowd classification

use crate::types::CrowdLevel;

/// Lower bound of the medium band
pub const MEDIUM_THRESHOLD: f64 = 0.40;
/// Lower bound of the high band
pub const HIGH_THRESHOLD: f64 = 0.65;
/// Lower bound of the critical band
pub const CRITICAL_THRESHOLD: f64 = 0.85;

/// Classify a utilization ratio
///
/// Each band includes its lower bound. Oversubscription (`r > 1`), infinity and NaN
/// all classify as critical, so a ratio produced by a zero denominator never reads
/// as a quiet attraction.
pub fn classify(ratio: f64) -> CrowdLevel {
    if ratio < MEDIUM_THRESHOLD {
        CrowdLevel::Low
    } else if ratio < HIGH_THRESHOLD {
        CrowdLevel::Medium
    } else if ratio < CRITICAL_THRESHOLD {
        CrowdLevel::High
    } else {
        CrowdLevel::Critical
    }
}

/// Classify `load / capacity`, reporting critical when capacity is not positive
pub fn classify_load(load: f64, capacity: f64) -> CrowdLevel {
    if capacity > 0.0 {
        classify(load / capacity)
    } else {
        CrowdLevel::Critical
    }
}
