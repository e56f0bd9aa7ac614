//! One-shot generator functions
//!
//! Each function samples the built-in catalog with the thread-local RNG and the local
//! clock, matching what a dashboard calls on every refresh. Use
//! [`ParkSimulator`](crate::simulation::ParkSimulator) for seeded runs or a custom
//! catalog.

use crate::catalog::{default_attractions, default_zones, ParkCatalog};
use crate::simulation::{intensity, ParkClock};
use crate::telemetry::{
    self, Alert, Attraction, FlowRates, HourlyVisitors, QueueHistoryPoint, Suggestion, WeeklyReport,
    Zone, ZoneShare,
};
use chrono::{DateTime, TimeZone};

fn current_intensity() -> f64 {
    intensity::intensity_multiplier(&ParkClock::System.now())
}

/// Demand multiplier for `now`
pub fn intensity_multiplier<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    intensity::intensity_multiplier(now)
}

/// Telemetry for the eight built-in attractions
pub fn generate_attractions() -> Vec<Attraction> {
    telemetry::generate_attractions(&default_attractions(), current_intensity(), &mut rand::thread_rng())
}

/// Occupancy of the five built-in zones
pub fn generate_zones() -> Vec<Zone> {
    telemetry::generate_zones(&default_zones(), current_intensity(), &mut rand::thread_rng())
}

/// Park-wide visitor total
pub fn generate_total_visitors() -> u32 {
    telemetry::total_visitors(current_intensity(), &mut rand::thread_rng())
}

/// Crowd-stress index (0-100)
pub fn generate_crowd_stress_index() -> u32 {
    telemetry::crowd_stress_index(current_intensity(), &mut rand::thread_rng())
}

/// Gate inflow and outflow per minute
pub fn generate_flow_rates() -> FlowRates {
    telemetry::flow_rates(&mut rand::thread_rng())
}

/// Queue-wait series around now; empty when `attraction_id` is not a built-in attraction
pub fn generate_queue_history(attraction_id: &str) -> Vec<QueueHistoryPoint> {
    telemetry::queue_history(
        &ParkCatalog::default(),
        attraction_id,
        ParkClock::System.now(),
        &mut rand::thread_rng(),
    )
}

/// The five alerts, stamped against now
pub fn generate_alerts() -> Vec<Alert> {
    telemetry::generate_alerts(ParkClock::System.now())
}

/// The four standing recommendations
pub fn generate_suggestions() -> Vec<Suggestion> {
    telemetry::generate_suggestions()
}

/// Visitors per opening hour, today against average
pub fn generate_hourly_visitors() -> Vec<HourlyVisitors> {
    telemetry::hourly_visitors(&mut rand::thread_rng())
}

/// Visitor share by zone type
pub fn generate_zone_distribution() -> Vec<ZoneShare> {
    telemetry::zone_distribution()
}

/// Last week's operations report
pub fn generate_weekly_report() -> WeeklyReport {
    telemetry::weekly_report()
}
