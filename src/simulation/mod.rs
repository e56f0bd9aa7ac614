//! Simulation core and control
//!
//! This module contains the time-of-day intensity model, the noise and crowd
//! classification primitives, the clock, the ParkSimulator that binds them to a
//! catalog, plus error handling and logging setup.
//!
//! # Overview
//!
//! - **ParkSimulator**: seeded generator over a validated catalog and a clock
//! - **intensity**: wall-clock time to a demand multiplier in `[0, 1]`
//! - **noise**: bounded uniform perturbation, clamped at zero
//! - **crowd**: utilization ratio to a [`CrowdLevel`](crate::types::CrowdLevel)
//! - **ParkClock**: system time, or a pinned instant for replays and tests
//! - **SimulationError**: error handling for the fallible edges
//!
//! # Usage Example
//!
//! ```rust
//! use park_ops_sim::simulation::*;
//! use park_ops_sim::types::SimulationConfig;
//! use chrono::{FixedOffset, TimeZone};
//!
//! let noon = FixedOffset::east_opt(8 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2024, 7, 1, 12, 30, 0)
//!     .unwrap();
//! let config = SimulationConfig { seed: Some(42), start_time: Some(noon), ..Default::default() };
//!
//! let mut simulator = ParkSimulator::new(config).unwrap();
//! assert_eq!(simulator.intensity(), 1.0);
//! assert_eq!(simulator.attractions().len(), 8);
//! assert_eq!(simulator.queue_history("coaster").len(), 19);
//! ```

pub mod clock;
pub mod crowd;
pub mod error;
pub mod intensity;
pub mod logging;
pub mod noise;
pub mod simulator;

// Re-export all public types for convenience
pub use clock::*;
pub use crowd::*;
pub use error::*;
pub use intensity::*;
pub use logging::*;
pub use noise::noise;
pub use simulator::*;
