//! Zone aggregator

use crate::catalog::ZoneSpec;
use crate::simulation::crowd::classify_load;
use crate::simulation::noise::noise;
use crate::types::{CrowdLevel, ZoneId};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Share of zone capacity occupied at full demand
const ZONE_LOAD_FACTOR: f64 = 0.7;

/// Visitor noise as a share of zone capacity
const ZONE_VARIANCE_FACTOR: f64 = 0.15;

/// A zone with this tick's visitor count attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Static catalog fields
    #[serde(flatten)]
    pub spec: ZoneSpec,
    /// Visitors currently in the zone
    pub current_visitors: u32,
    /// Visitors against rated capacity
    pub crowd_level: CrowdLevel,
}

impl Zone {
    /// Identifier of the zone
    pub fn id(&self) -> &ZoneId {
        &self.spec.id
    }

    /// Current visitors as a fraction of capacity (0 for a zero-capacity zone)
    pub fn occupancy(&self) -> f64 {
        if self.spec.capacity == 0 {
            return 0.0;
        }
        f64::from(self.current_visitors) / f64::from(self.spec.capacity)
    }
}

/// Sample one zone at the given demand multiplier
pub fn sample_zone<R: Rng + ?Sized>(spec: &ZoneSpec, multiplier: f64, rng: &mut R) -> Zone {
    let capacity = f64::from(spec.capacity);
    let current_visitors =
        noise(capacity * multiplier * ZONE_LOAD_FACTOR, capacity * ZONE_VARIANCE_FACTOR, rng);

    Zone {
        spec: spec.clone(),
        current_visitors,
        crowd_level: classify_load(f64::from(current_visitors), capacity),
    }
}

/// Sample every zone in catalog order
pub fn generate_zones<R: Rng + ?Sized>(
    specs: &[ZoneSpec],
    multiplier: f64,
    rng: &mut R,
) -> Vec<Zone> {
    specs.iter().map(|spec| sample_zone(spec, multiplier, rng)).collect()
}
