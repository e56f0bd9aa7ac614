//! Dashboard-side polling
//!
//! The telemetry engine keeps no state between calls. What a dashboard accumulates
//! across refreshes, the tick counter and the peak visitor watermark, lives here.
//!
//! # Usage Example
//!
//! ```rust
//! use park_ops_sim::catalog::ParkCatalog;
//! use park_ops_sim::dashboard::DashboardPoller;
//! use park_ops_sim::simulation::ParkSimulator;
//!
//! let simulator = ParkSimulator::from_catalog(ParkCatalog::default(), Some(1)).unwrap();
//! let mut poller = DashboardPoller::new(simulator, "coaster");
//!
//! let first = poller.tick();
//! let second = poller.tick();
//! assert!(second.peak_visitors >= first.peak_visitors);
//! ```

pub mod poller;
pub mod watermark;

pub use poller::*;
pub use watermark::*;
