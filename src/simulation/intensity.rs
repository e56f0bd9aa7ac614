//! Time-of-day intensity model
//!
//! Maps wall-clock time to a demand multiplier in `[0, 1]` that shapes every other
//! generated value: near-zero overnight, a morning ramp, a 1.0 plateau from 12:00 to
//! 14:00 and an afternoon/evening decline.

use chrono::{DateTime, TimeZone, Timelike};

/// Multiplier outside opening hours
pub const OVERNIGHT_INTENSITY: f64 = 0.1;

/// Multiplier over the midday plateau
pub const PEAK_INTENSITY: f64 = 1.0;

/// Hours at which the curve changes slope, in order
pub const BREAKPOINTS: [f64; 10] = [7.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 23.0];

/// Fractional hour of day (`hour + minute / 60`) for a timestamp in its own offset
pub fn hour_of_day<Tz: TimeZone>(time: &DateTime<Tz>) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Demand multiplier for a fractional hour of day
///
/// Piecewise linear and continuous at every entry of [`BREAKPOINTS`].
pub fn intensity_at_hour(t: f64) -> f64 {
    if !t.is_finite() {
        return OVERNIGHT_INTENSITY;
    }

    let value = if t < 7.0 {
        OVERNIGHT_INTENSITY
    } else if t < 8.0 {
        0.1 + (t - 7.0) * 0.2
    } else if t < 10.0 {
        0.3 + (t - 8.0) * 0.15
    } else if t < 12.0 {
        0.6 + (t - 10.0) * 0.2
    } else if t < 14.0 {
        PEAK_INTENSITY
    } else if t < 16.0 {
        1.0 - (t - 14.0) * 0.075
    } else if t < 18.0 {
        0.85 - (t - 16.0) * 0.1
    } else if t < 20.0 {
        0.65 - (t - 18.0) * 0.15
    } else if t < 22.0 {
        0.35 - (t - 20.0) * 0.1
    } else if t < 23.0 {
        0.15 - (t - 22.0) * 0.05
    } else {
        OVERNIGHT_INTENSITY
    };

    value.clamp(0.0, 1.0)
}

/// Demand multiplier for a wall-clock timestamp
pub fn intensity_multiplier<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    intensity_at_hour(hour_of_day(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_values() {
        assert!(close(intensity_at_hour(13.0), 1.0));
        assert!(close(intensity_at_hour(7.0), 0.1));
        assert!(close(intensity_at_hour(23.0), 0.1));
        assert!(close(intensity_at_hour(3.0), 0.1));
        assert!(close(intensity_at_hour(9.0), 0.45));
        assert!(close(intensity_at_hour(11.0), 0.8));
        assert!(close(intensity_at_hour(17.0), 0.75));
        assert!(close(intensity_at_hour(19.0), 0.5));
        assert!(close(intensity_at_hour(21.0), 0.25));
    }

    #[test]
    fn test_continuous_at_breakpoints() {
        let eps = 1e-7;
        for &b in BREAKPOINTS.iter() {
            let left = intensity_at_hour(b - eps);
            let right = intensity_at_hour(b);
            assert!((left - right).abs() < 1e-5, "jump at {}: {} vs {}", b, left, right);
        }
    }

    #[test]
    fn test_always_within_unit_interval() {
        let mut t = -2.0;
        while t <= 26.0 {
            let v = intensity_at_hour(t);
            assert!((0.0..=1.0).contains(&v), "{} out of range at {}", v, t);
            t += 0.01;
        }
        assert!(close(intensity_at_hour(f64::NAN), OVERNIGHT_INTENSITY));
        assert!(close(intensity_at_hour(f64::INFINITY), OVERNIGHT_INTENSITY));
    }

    #[test]
    fn test_hour_of_day_uses_minutes() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let time = tz.with_ymd_and_hms(2024, 7, 1, 9, 30, 59).unwrap();
        assert!(close(hour_of_day(&time), 9.5));
        assert!(close(intensity_multiplier(&time), 0.3 + 1.5 * 0.15));

        let utc = Utc.with_ymd_and_hms(2024, 7, 1, 12, 45, 0).unwrap();
        assert!(close(intensity_multiplier(&utc), 1.0));
    }
}
