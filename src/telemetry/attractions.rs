//! Attraction telemetry generator
//!
//! Attaches a freshly sampled queue, wait time, today's peak wait and crowd level to
//! every catalog attraction. Nothing is carried between calls.

use crate::catalog::AttractionSpec;
use crate::simulation::crowd::classify;
use crate::simulation::noise::{clamp_round, noise, unit_span};
use crate::types::{AttractionId, CrowdLevel};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Reported wait when an attraction has no throughput to drain its queue
pub const WAIT_TIME_CEILING_MINUTES: u32 = 999;

/// Queue length, in minutes of rated throughput, that counts as full utilization
pub const REFERENCE_QUEUE_MINUTES: f64 = 8.0;

/// Baseline queue spans this many minutes of throughput plus up to [`BASE_QUEUE_SPAN_MINUTES`]
const BASE_QUEUE_MIN_MINUTES: f64 = 3.0;
const BASE_QUEUE_SPAN_MINUTES: f64 = 5.0;

/// Relative noise applied to the queue
const QUEUE_VARIANCE_FACTOR: f64 = 0.2;

/// Today's peak wait is the current wait scaled by 1.2 plus up to 0.3
const PEAK_WAIT_MIN_FACTOR: f64 = 1.2;
const PEAK_WAIT_SPAN: f64 = 0.3;

/// An attraction with this tick's telemetry attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    /// Static catalog fields
    #[serde(flatten)]
    pub spec: AttractionSpec,
    /// Guests currently queuing
    pub current_queue: u32,
    /// Estimated wait for a guest joining now
    pub wait_time_minutes: u32,
    /// Highest wait observed today
    pub max_wait_today: u32,
    /// Queue utilization against an eight-minute reference queue
    pub crowd_level: CrowdLevel,
}

impl Attraction {
    /// Identifier of the attraction
    pub fn id(&self) -> &AttractionId {
        &self.spec.id
    }
}

/// Minutes needed to serve `queue` guests at `per_minute` throughput
///
/// Returns [`WAIT_TIME_CEILING_MINUTES`] when nothing is being served.
pub fn wait_minutes(queue: u32, per_minute: f64) -> u32 {
    if per_minute > 0.0 {
        clamp_round(f64::from(queue) / per_minute)
    } else {
        WAIT_TIME_CEILING_MINUTES
    }
}

/// Sample one attraction's telemetry at the given demand multiplier
pub fn sample_attraction<R: Rng + ?Sized>(
    spec: &AttractionSpec,
    multiplier: f64,
    rng: &mut R,
) -> Attraction {
    let per_minute = spec.throughput_per_minute();

    if !spec.has_throughput() {
        warn!("Attraction {} has no throughput; reporting ceiling wait", spec.id);
        return Attraction {
            spec: spec.clone(),
            current_queue: 0,
            wait_time_minutes: WAIT_TIME_CEILING_MINUTES,
            max_wait_today: WAIT_TIME_CEILING_MINUTES,
            crowd_level: CrowdLevel::Critical,
        };
    }

    let base_queue =
        per_minute * (BASE_QUEUE_MIN_MINUTES + unit_span(BASE_QUEUE_SPAN_MINUTES, rng));
    let current_queue = noise(base_queue * multiplier, base_queue * QUEUE_VARIANCE_FACTOR, rng);
    let wait_time_minutes = wait_minutes(current_queue, per_minute);
    let peak_factor = PEAK_WAIT_MIN_FACTOR + unit_span(PEAK_WAIT_SPAN, rng);
    let max_wait_today = clamp_round(f64::from(wait_time_minutes) * peak_factor);
    let crowd_level = classify(f64::from(current_queue) / (per_minute * REFERENCE_QUEUE_MINUTES));

    Attraction {
        spec: spec.clone(),
        current_queue,
        wait_time_minutes,
        max_wait_today,
        crowd_level,
    }
}

/// Sample every attraction in catalog order
pub fn generate_attractions<R: Rng + ?Sized>(
    specs: &[AttractionSpec],
    multiplier: f64,
    rng: &mut R,
) -> Vec<Attraction> {
    specs.iter().map(|spec| sample_attraction(spec, multiplier, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_attractions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_preserved_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let specs = default_attractions();
        let attractions = generate_attractions(&specs, 0.8, &mut rng);
        let ids: Vec<&str> = attractions.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(
            ids,
            vec!["coaster", "carousel", "ferris", "splash", "haunted", "teacup", "pirate", "bumper"]
        );
    }

    #[test]
    fn test_derived_field_invariants() {
        let mut rng = StdRng::seed_from_u64(9);
        let specs = default_attractions();
        for step in 0..=20 {
            let multiplier = step as f64 / 20.0;
            for attraction in generate_attractions(&specs, multiplier, &mut rng) {
                let per_minute = attraction.spec.throughput_per_minute();
                assert_eq!(
                    attraction.wait_time_minutes,
                    (f64::from(attraction.current_queue) / per_minute).round() as u32
                );
                assert!(attraction.max_wait_today >= attraction.wait_time_minutes);
                assert_eq!(
                    attraction.crowd_level,
                    classify(f64::from(attraction.current_queue) / (per_minute * 8.0))
                );
            }
        }
    }

    #[test]
    fn test_queue_bounds_at_peak() {
        let mut rng = StdRng::seed_from_u64(5);
        let specs = default_attractions();
        let coaster = &specs[0];
        for _ in 0..1_000 {
            let sample = sample_attraction(coaster, 1.0, &mut rng);
            // 12 guests/min * 3..8 minutes, ±20%
            assert!(sample.current_queue >= 28, "queue {}", sample.current_queue);
            assert!(sample.current_queue <= 116, "queue {}", sample.current_queue);
        }
    }

    #[test]
    fn test_zero_throughput_reports_ceiling() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spec = default_attractions().remove(0);
        spec.throughput_per_hour = 0;
        let sample = sample_attraction(&spec, 1.0, &mut rng);
        assert_eq!(sample.current_queue, 0);
        assert_eq!(sample.wait_time_minutes, WAIT_TIME_CEILING_MINUTES);
        assert_eq!(sample.max_wait_today, WAIT_TIME_CEILING_MINUTES);
        assert_eq!(sample.crowd_level, CrowdLevel::Critical);
    }

    #[test]
    fn test_wait_minutes() {
        assert_eq!(wait_minutes(120, 12.0), 10);
        assert_eq!(wait_minutes(0, 12.0), 0);
        assert_eq!(wait_minutes(5, 0.0), WAIT_TIME_CEILING_MINUTES);
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let mut rng = StdRng::seed_from_u64(2);
        let sample = sample_attraction(&default_attractions()[2], 0.5, &mut rng);
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["id"], "ferris");
        assert_eq!(json["throughput_per_hour"], 480);
        assert!(json["wait_time_minutes"].is_u64());
        assert!(json["crowd_level"].is_string());
    }
}
