//! Park catalog: the static attraction and zone lists
//!
//! # Overview
//!
//! The catalog is configuration data. Every tick the telemetry generators walk the
//! same lists and attach freshly sampled values, so identity never changes between
//! ticks.
//!
//! - **AttractionSpec**: name, icon, zone, throughput, map position, camera
//! - **ZoneSpec**: name and rated capacity
//! - **ParkCatalog**: both lists with lookup and validation
//!
//! # Usage Example
//!
//! ```rust
//! use park_ops_sim::catalog::ParkCatalog;
//!
//! let catalog = ParkCatalog::default();
//! assert!(catalog.validate().is_ok());
//! assert_eq!(catalog.attraction("coaster").unwrap().throughput_per_hour, 720);
//! ```

pub mod attraction;
pub mod defaults;
pub mod registry;
pub mod zone;

pub use attraction::*;
pub use defaults::*;
pub use registry::*;
pub use zone::*;
