//! Wall-clock source for the generators
//!
//! The engine reads the time once per call. Production uses the local system clock;
//! tests and replays pin it to a fixed instant.

use chrono::{DateTime, FixedOffset, Local};
use tracing::debug;

/// Source of "now" for a simulator
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ParkClock {
    /// Local wall-clock time
    #[default]
    System,
    /// A pinned instant
    Fixed(DateTime<FixedOffset>),
}

impl ParkClock {
    /// Clock pinned at `time`
    pub fn fixed(time: DateTime<FixedOffset>) -> Self {
        ParkClock::Fixed(time)
    }

    /// Current time in the park's local offset
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            ParkClock::System => Local::now().fixed_offset(),
            ParkClock::Fixed(time) => *time,
        }
    }

    /// Move a pinned clock forward; a system clock is unaffected
    pub fn advance_by(&mut self, duration: chrono::Duration) {
        if let ParkClock::Fixed(time) = self {
            *time += duration;
            debug!("Advanced pinned clock to {}", time);
        }
    }
}
