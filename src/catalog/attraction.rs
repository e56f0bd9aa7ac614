//! Static attraction catalog entries
//!
//! This module contains the AttractionSpec struct describing the fixed, per-attraction
//! fields that survive across ticks. Derived telemetry is attached by
//! [`crate::telemetry::attractions`].

use crate::types::{AttractionId, AttractionStatus, CameraPurpose, LocalizedText, ZoneId};
use serde::{Deserialize, Serialize};

/// Position of an attraction on the park map, in percent of map width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    /// Horizontal position (0-100)
    pub x: f64,
    /// Vertical position (0-100)
    pub y: f64,
}

impl MapPosition {
    /// Create a map position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates lie on the map
    pub fn is_on_map(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// Live camera feed attached to an attraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFeed {
    /// Stream URL shown by the dashboard
    pub stream_url: String,
    /// What the camera watches
    pub purpose: CameraPurpose,
}

/// Configuration-time description of an attraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractionSpec {
    /// Unique identifier for the attraction
    pub id: AttractionId,
    /// Display name
    pub name: LocalizedText,
    /// Icon glyph
    pub icon: String,
    /// Zone the attraction belongs to
    pub zone: ZoneId,
    /// Guests per ride cycle
    pub capacity: u32,
    /// Current operating status
    pub status: AttractionStatus,
    /// Rated guests served per hour
    pub throughput_per_hour: u32,
    /// Fixed map position
    pub position: MapPosition,
    /// Optional camera feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraFeed>,
}

impl AttractionSpec {
    /// Guests served per minute at rated throughput
    pub fn throughput_per_minute(&self) -> f64 {
        f64::from(self.throughput_per_hour) / 60.0
    }

    /// Whether wait-time arithmetic is defined for this attraction
    pub fn has_throughput(&self) -> bool {
        self.throughput_per_hour > 0
    }

    /// Check if the attraction is open
    pub fn is_operating(&self) -> bool {
        self.status == AttractionStatus::Operating
    }
}
