//! Telemetry generators
//!
//! Each generator takes the demand multiplier (or the current time) and a random
//! source, and returns freshly sampled values. No generator keeps state between
//! calls.
//!
//! # Overview
//!
//! - **attractions**: queue length, wait time, today's peak wait and crowd level
//! - **zones**: visitors per zone and zone crowd level
//! - **park**: park-wide visitor total, crowd-stress index and gate flow
//! - **history**: 19-point queue-wait series with a 30-minute forecast
//! - **analytics**: hourly visitors, zone share and the weekly report
//! - **alerts**: alert and suggestion templates with dashboard decision helpers
//!
//! # Usage Example
//!
//! ```rust
//! use park_ops_sim::catalog::default_attractions;
//! use park_ops_sim::telemetry::generate_attractions;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let attractions = generate_attractions(&default_attractions(), 0.8, &mut rng);
//! assert_eq!(attractions.len(), 8);
//! assert!(attractions.iter().all(|a| a.max_wait_today >= a.wait_time_minutes));
//! ```

pub mod alerts;
pub mod analytics;
pub mod attractions;
pub mod history;
pub mod park;
pub mod zones;

pub use alerts::*;
pub use analytics::*;
pub use attractions::*;
pub use history::*;
pub use park::*;
pub use zones::*;
