//! Park-wide metrics
//!
//! Total visitors and the crowd-stress index are sampled directly from the intensity
//! multiplier. They are not aggregated from the per-zone or per-attraction values of
//! the same tick, so a dashboard can show totals that disagree with the zone sum.

use crate::simulation::noise::{clamp_round, noise, unit_span};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Visitors in the park at full demand
pub const PEAK_PARK_VISITORS: f64 = 12_000.0;

/// Absolute noise on the visitor total
pub const VISITOR_VARIANCE: f64 = 800.0;

/// Stress index at full demand
pub const STRESS_AT_PEAK: f64 = 75.0;

/// Absolute noise on the stress index
pub const STRESS_VARIANCE: f64 = 12.0;

/// Upper bound of the stress index
pub const MAX_STRESS_INDEX: u32 = 100;

/// Gate throughput, in visitors per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRates {
    /// Visitors entering per minute
    pub inflow_per_min: u32,
    /// Visitors leaving per minute
    pub outflow_per_min: u32,
}

impl FlowRates {
    /// Inflow minus outflow
    pub fn net_per_min(&self) -> i64 {
        i64::from(self.inflow_per_min) - i64::from(self.outflow_per_min)
    }
}

/// Sample the park-wide visitor total
pub fn total_visitors<R: Rng + ?Sized>(multiplier: f64, rng: &mut R) -> u32 {
    noise(PEAK_PARK_VISITORS * multiplier, VISITOR_VARIANCE, rng)
}

/// Sample the crowd-stress index in `0..=100`
pub fn crowd_stress_index<R: Rng + ?Sized>(multiplier: f64, rng: &mut R) -> u32 {
    noise(multiplier * STRESS_AT_PEAK, STRESS_VARIANCE, rng).min(MAX_STRESS_INDEX)
}

/// Sample gate flow: 2-7 in and 1-4 out per minute
pub fn flow_rates<R: Rng + ?Sized>(rng: &mut R) -> FlowRates {
    FlowRates {
        inflow_per_min: clamp_round(2.0 + unit_span(5.0, rng)),
        outflow_per_min: clamp_round(1.0 + unit_span(3.0, rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_total_visitors_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1_000 {
            let visitors = total_visitors(1.0, &mut rng);
            assert!((11_200..=12_800).contains(&visitors));
        }
        for _ in 0..1_000 {
            // Overnight the 800-visitor noise dominates the 1,200 base
            let visitors = total_visitors(0.1, &mut rng);
            assert!((400..=2_000).contains(&visitors));
        }
    }

    #[test]
    fn test_stress_index_clamped() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..1_000 {
            assert!(crowd_stress_index(1.0, &mut rng) <= 87);
            assert!(crowd_stress_index(5.0, &mut rng) <= MAX_STRESS_INDEX);
        }
        assert_eq!(crowd_stress_index(10.0, &mut rng), MAX_STRESS_INDEX);
    }

    #[test]
    fn test_flow_rate_ranges() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..1_000 {
            let flow = flow_rates(&mut rng);
            assert!((2..=7).contains(&flow.inflow_per_min));
            assert!((1..=4).contains(&flow.outflow_per_min));
        }
        let flow = FlowRates { inflow_per_min: 3, outflow_per_min: 5 };
        assert_eq!(flow.net_per_min(), -2);
    }
}
