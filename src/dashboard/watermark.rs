//! Peak visitor watermark

use serde::{Deserialize, Serialize};

/// Highest visitor total seen since the dashboard started
///
/// The engine is stateless, so "peak today" lives here with the consumer. It starts
/// at zero, never decreases, and only resets when a new watermark is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWatermark {
    peak: u32,
}

impl PeakWatermark {
    /// A watermark at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading and return the updated peak
    pub fn observe(&mut self, visitors: u32) -> u32 {
        self.peak = self.peak.max(visitors);
        self.peak
    }

    /// Current peak
    pub fn peak(&self) -> u32 {
        self.peak
    }
}
