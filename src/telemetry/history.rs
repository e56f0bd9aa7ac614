//! Queue history and forecast series
//!
//! A 95-minute window around "now" at 5-minute spacing: twelve observed points, the
//! current point, and six forecast points with no observed value.

use crate::catalog::ParkCatalog;
use crate::simulation::intensity::hour_of_day;
use crate::simulation::noise::noise;
use chrono::{DateTime, Duration, FixedOffset};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Observed points before "now"
pub const HISTORY_PAST_POINTS: i64 = 12;

/// Forecast points after "now"
pub const HISTORY_FUTURE_POINTS: i64 = 6;

/// Spacing between points
pub const HISTORY_STEP_MINUTES: i64 = 5;

const ACTUAL_VARIANCE: f64 = 8.0;
const PREDICTED_VARIANCE: f64 = 5.0;

/// One point of a queue-wait series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueHistoryPoint {
    /// Local wall-clock label, `HH:MM`
    pub time: String,
    /// Observed wait in minutes; 0 for forecast points
    pub actual: u32,
    /// Forecast wait in minutes
    pub predicted: u32,
}

/// Baseline wait for a point at fractional `hour` of day
///
/// Both band edges are inclusive, so 14:00 still belongs to the midday band and
/// 18:00 to the afternoon band.
pub fn baseline_wait(hour: f64) -> f64 {
    if (10.0..=14.0).contains(&hour) {
        45.0
    } else if (14.0..=18.0).contains(&hour) {
        35.0
    } else {
        20.0
    }
}

/// Build the series for `attraction_id` around `now`
///
/// The id only gates the call: every known attraction draws from the same baseline.
/// An unknown id yields an empty series.
pub fn queue_history<R: Rng + ?Sized>(
    catalog: &ParkCatalog,
    attraction_id: &str,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Vec<QueueHistoryPoint> {
    if !catalog.contains_attraction(attraction_id) {
        debug!("No queue history for unknown attraction {}", attraction_id);
        return Vec::new();
    }

    (-HISTORY_PAST_POINTS..=HISTORY_FUTURE_POINTS)
        .map(|offset| {
            let time = now + Duration::minutes(offset * HISTORY_STEP_MINUTES);
            let base = baseline_wait(hour_of_day(&time));
            let predicted = noise(base, PREDICTED_VARIANCE, rng);
            let actual = if offset <= 0 { noise(base, ACTUAL_VARIANCE, rng) } else { 0 };
            QueueHistoryPoint { time: time.format("%H:%M").to_string(), actual, predicted }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 7, 1, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_series_shape() {
        let mut rng = StdRng::seed_from_u64(21);
        let series = queue_history(&ParkCatalog::default(), "coaster", at(12, 0), &mut rng);
        assert_eq!(series.len(), 19);
        assert_eq!(series[0].time, "11:00");
        assert_eq!(series[12].time, "12:00");
        assert_eq!(series[18].time, "12:30");
        for (index, point) in series.iter().enumerate() {
            if index > 12 {
                assert_eq!(point.actual, 0);
            }
            assert!((40..=50).contains(&point.predicted));
        }
        assert!(series[..=12].iter().all(|p| (37..=53).contains(&p.actual)));
    }

    #[test]
    fn test_baseline_follows_each_points_hour() {
        let mut rng = StdRng::seed_from_u64(2);
        // 09:05 .. 10:35 straddles the 10:00 step from 20 to 45
        let series = queue_history(&ParkCatalog::default(), "ferris", at(10, 5), &mut rng);
        assert_eq!(series[0].time, "09:05");
        assert!(series[0].predicted <= 25);
        assert!(series[18].predicted >= 40);
    }

    #[test]
    fn test_labels_wrap_midnight() {
        let mut rng = StdRng::seed_from_u64(4);
        let series = queue_history(&ParkCatalog::default(), "coaster", at(0, 10), &mut rng);
        assert_eq!(series[0].time, "23:10");
        assert_eq!(series[18].time, "00:40");
    }

    #[test]
    fn test_unknown_attraction_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(queue_history(&ParkCatalog::default(), "monorail", at(12, 0), &mut rng).is_empty());
    }

    #[test]
    fn test_baseline_wait_bands() {
        let band = |hour: u32, minute: u32| baseline_wait(hour_of_day(&at(hour, minute)));

        assert_eq!(band(9, 55), 20.0);
        assert_eq!(band(10, 0), 45.0);
        assert_eq!(band(14, 0), 45.0);
        assert_eq!(band(14, 5), 35.0);
        assert_eq!(band(18, 0), 35.0);
        assert_eq!(band(18, 5), 20.0);
    }

    #[test]
    fn test_points_just_past_the_hour_change_band() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = queue_history(&ParkCatalog::default(), "coaster", at(15, 0), &mut rng);
        let point = series.iter().find(|p| p.time == "14:05").unwrap();
        assert!((30..=40).contains(&point.predicted));
        assert!((27..=43).contains(&point.actual));

        let series = queue_history(&ParkCatalog::default(), "coaster", at(18, 30), &mut rng);
        for point in series.iter().filter(|p| p.time.as_str() > "18:00") {
            assert!((15..=25).contains(&point.predicted), "{} predicted {}", point.time, point.predicted);
        }
    }
}
