//! Park Ops Simulator
//!
//! A synthetic telemetry engine for theme park operations dashboards. It generates
//! plausible, time-of-day-aware attraction queues, zone occupancy, park-wide visitor
//! totals, queue-wait history, alerts and recommendations.
//!
//! # Overview
//!
//! Every value is sampled afresh on each call from three ingredients: a static
//! catalog, a demand multiplier derived from the wall-clock time, and bounded uniform
//! noise. Nothing is persisted between calls; consumers that want continuity (such as
//! a peak visitor watermark) keep it themselves.
//!
//! ## Key Features
//!
//! - **Time-of-day Demand**: continuous piecewise-linear intensity curve peaking at midday
//! - **Attraction Telemetry**: queue length, wait time, today's peak wait and crowd level
//! - **Zone Occupancy**: visitors and crowd level for every park zone
//! - **Trends**: queue history with forecast, hourly visitors, zone share, weekly report
//! - **Operations**: bilingual alerts and recommendations with dashboard decision helpers
//! - **Reproducible Runs**: seeded RNG and a pinnable clock
//!
//! ## Quick Start
//!
//! ```rust
//! use park_ops_sim::*;
//!
//! let config = SimulationConfig { seed: Some(42), ..Default::default() };
//! let simulator = ParkSimulator::new(config)?;
//! let mut poller = DashboardPoller::new(simulator, "coaster");
//!
//! let snapshot = poller.tick();
//! assert_eq!(snapshot.attractions.len(), 8);
//! println!("{}", snapshot.summary(Language::En));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, bilingual text and configuration
//! - [`catalog`]: Static attraction and zone lists
//! - [`simulation`]: Intensity model, noise, crowd classification, clock and simulator
//! - [`telemetry`]: Per-tick generators and dashboard decision helpers
//! - [`dashboard`]: Polling driver, snapshots and the peak watermark
//! - [`api`]: One-shot functions over the built-in catalog
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Catalog   │    │ Simulation  │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Attractions │◄───┤ Intensity   │
//! │ Enums       │    │ Zones       │    │ Noise/Crowd │
//! │ Config      │    │             │    │ Simulator   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                           ▲                  │
//!                           │                  ▼
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │  Telemetry  │◄───┤  Dashboard  │
//!                    │             │    │             │
//!                    │ Generators  │    │ Poller      │
//!                    │ Alerts      │    │ Watermark   │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod api;
pub mod catalog;
pub mod dashboard;
pub mod simulation;
pub mod telemetry;
pub mod types;

// Core types and identifiers
pub use types::{
    // Identifiers
    AlertId,
    AttractionId,
    ZoneId,
    // Enums
    AlertSeverity,
    AttractionStatus,
    CrowdLevel,
    Language,
    SuggestionPriority,
    // Text
    LocalizedText,
    // Configuration
    ConfigValidationError,
    SimulationConfig,
};

// Catalog
pub use catalog::{AttractionSpec, CatalogError, ParkCatalog, ZoneSpec};

// Telemetry records
pub use telemetry::{
    Alert, AlertStatus, Attraction, FlowRates, HourlyVisitors, QueueHistoryPoint, Suggestion,
    WeeklyReport, Zone, ZoneShare,
};

// Simulation and dashboard
pub use dashboard::{DashboardPoller, DashboardSnapshot, PeakWatermark};
pub use simulation::{ParkClock, ParkSimulator, SimulationError, SimulationResult};
