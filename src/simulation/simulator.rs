//! Park telemetry simulator
//!
//! This module contains the ParkSimulator, which binds a validated catalog, a random
//! source and a clock to the telemetry generators.

use crate::catalog::ParkCatalog;
use crate::simulation::clock::ParkClock;
use crate::simulation::intensity::intensity_multiplier;
use crate::simulation::SimulationResult;
use crate::telemetry::{
    self, Alert, Attraction, FlowRates, HourlyVisitors, QueueHistoryPoint, Suggestion, WeeklyReport,
    Zone, ZoneShare,
};
use crate::types::SimulationConfig;
use chrono::{DateTime, FixedOffset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

/// Generates telemetry over one catalog
///
/// Every call samples afresh. Two simulators built with the same seed, catalog and
/// pinned clock return identical values for the same sequence of calls.
#[derive(Debug)]
pub struct ParkSimulator {
    catalog: ParkCatalog,
    rng: StdRng,
    clock: ParkClock,
}

impl ParkSimulator {
    /// Create a simulator from a full configuration
    ///
    /// The configuration is validated first. A `start_time` pins the clock.
    #[instrument(skip(config), fields(
        attractions = config.catalog.attractions.len(),
        zones = config.catalog.zones.len(),
        seed = ?config.seed,
    ))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let clock = config.start_time.map(ParkClock::fixed).unwrap_or_default();
        let simulator = Self::from_catalog(config.catalog, config.seed)?.with_clock(clock);

        info!(
            "Park simulator ready with {} attractions across {} zones",
            simulator.catalog.attractions.len(),
            simulator.catalog.zones.len()
        );
        Ok(simulator)
    }

    /// Create a simulator over a catalog with an optional seed and the system clock
    pub fn from_catalog(catalog: ParkCatalog, seed: Option<u64>) -> SimulationResult<Self> {
        catalog.validate()?;

        let rng = match seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy()
            }
        };

        Ok(Self { catalog, rng, clock: ParkClock::default() })
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: ParkClock) -> Self {
        self.clock = clock;
        self
    }

    /// The catalog being simulated
    pub fn catalog(&self) -> &ParkCatalog {
        &self.catalog
    }

    /// The clock in use
    pub fn clock(&self) -> &ParkClock {
        &self.clock
    }

    /// Move a pinned clock forward
    pub fn advance_clock(&mut self, by: chrono::Duration) {
        self.clock.advance_by(by);
    }

    /// Current time according to the clock
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    /// Demand multiplier for the current time
    pub fn intensity(&self) -> f64 {
        intensity_multiplier(&self.now())
    }

    /// Sample every attraction at the current intensity
    #[instrument(skip(self))]
    pub fn attractions(&mut self) -> Vec<Attraction> {
        let multiplier = self.intensity();
        telemetry::generate_attractions(&self.catalog.attractions, multiplier, &mut self.rng)
    }

    /// Sample every zone at the current intensity
    #[instrument(skip(self))]
    pub fn zones(&mut self) -> Vec<Zone> {
        let multiplier = self.intensity();
        telemetry::generate_zones(&self.catalog.zones, multiplier, &mut self.rng)
    }

    /// Sample the park-wide visitor total
    pub fn total_visitors(&mut self) -> u32 {
        let multiplier = self.intensity();
        telemetry::total_visitors(multiplier, &mut self.rng)
    }

    /// Sample the crowd-stress index
    pub fn crowd_stress_index(&mut self) -> u32 {
        let multiplier = self.intensity();
        telemetry::crowd_stress_index(multiplier, &mut self.rng)
    }

    /// Sample gate inflow and outflow
    pub fn flow_rates(&mut self) -> FlowRates {
        telemetry::flow_rates(&mut self.rng)
    }

    /// Queue-wait series around now for one attraction; empty for an unknown id
    #[instrument(skip(self))]
    pub fn queue_history(&mut self, attraction_id: &str) -> Vec<QueueHistoryPoint> {
        let now = self.now();
        telemetry::queue_history(&self.catalog, attraction_id, now, &mut self.rng)
    }

    /// Alerts stamped against now
    pub fn alerts(&self) -> Vec<Alert> {
        telemetry::generate_alerts(self.now())
    }

    /// Standing recommendations
    pub fn suggestions(&self) -> Vec<Suggestion> {
        telemetry::generate_suggestions()
    }

    /// Visitors per opening hour, today against average
    pub fn hourly_visitors(&mut self) -> Vec<HourlyVisitors> {
        telemetry::hourly_visitors(&mut self.rng)
    }

    /// Visitor share by zone type
    pub fn zone_distribution(&self) -> Vec<ZoneShare> {
        telemetry::zone_distribution()
    }

    /// Last week's operations report
    pub fn weekly_report(&self) -> WeeklyReport {
        telemetry::weekly_report()
    }
}
