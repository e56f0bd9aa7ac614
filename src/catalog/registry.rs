//! Park catalog registry and lookup
//!
//! This module contains the ParkCatalog struct: the configured attraction and zone
//! lists, their lookups, and configuration-time validation.

use super::attraction::AttractionSpec;
use super::defaults::{default_attractions, default_zones};
use super::zone::ZoneSpec;
use crate::types::{AttractionId, ZoneId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No attractions configured
    #[error("Catalog must contain at least one attraction")]
    NoAttractions,

    /// No zones configured
    #[error("Catalog must contain at least one zone")]
    NoZones,

    /// Two attractions share an id
    #[error("Duplicate attraction id: {0}")]
    DuplicateAttraction(AttractionId),

    /// Two zones share an id
    #[error("Duplicate zone id: {0}")]
    DuplicateZone(ZoneId),

    /// An attraction points at a zone missing from the zone list
    #[error("Attraction {attraction} references unknown zone {zone}")]
    UnknownZone {
        /// Attraction holding the reference
        attraction: AttractionId,
        /// The missing zone
        zone: ZoneId,
    },

    /// Map position outside 0..=100
    #[error("Attraction {0} is positioned outside the park map")]
    OffMap(AttractionId),
}

/// The fixed attraction and zone lists the generators run over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkCatalog {
    /// Attractions, in display order
    pub attractions: Vec<AttractionSpec>,
    /// Zones, in display order
    pub zones: Vec<ZoneSpec>,
}

impl Default for ParkCatalog {
    fn default() -> Self {
        Self { attractions: default_attractions(), zones: default_zones() }
    }
}

impl ParkCatalog {
    /// Create a catalog from explicit lists
    pub fn new(attractions: Vec<AttractionSpec>, zones: Vec<ZoneSpec>) -> Self {
        Self { attractions, zones }
    }

    /// Get an attraction by id
    pub fn attraction(&self, id: &str) -> Option<&AttractionSpec> {
        self.attractions.iter().find(|a| a.id == *id)
    }

    /// Get a zone by id
    pub fn zone(&self, id: &str) -> Option<&ZoneSpec> {
        self.zones.iter().find(|z| z.id == *id)
    }

    /// Check whether an attraction id is in the catalog
    pub fn contains_attraction(&self, id: &str) -> bool {
        self.attraction(id).is_some()
    }

    /// Attractions located in a zone
    pub fn attractions_in_zone<'a>(
        &'a self,
        zone: &'a str,
    ) -> impl Iterator<Item = &'a AttractionSpec> + 'a {
        self.attractions.iter().filter(move |a| a.zone == *zone)
    }

    /// Total rated capacity over all zones
    pub fn total_zone_capacity(&self) -> u64 {
        self.zones.iter().map(|z| u64::from(z.capacity)).sum()
    }

    /// Validate the catalog
    ///
    /// Zero throughput or zero capacity is accepted with a warning: the generators
    /// report those entries as critical instead of dividing by zero.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.attractions.is_empty() {
            return Err(CatalogError::NoAttractions);
        }
        if self.zones.is_empty() {
            return Err(CatalogError::NoZones);
        }

        let mut zone_ids = HashSet::new();
        for zone in &self.zones {
            if !zone_ids.insert(zone.id.as_str()) {
                return Err(CatalogError::DuplicateZone(zone.id.clone()));
            }
            if zone.capacity == 0 {
                warn!("Zone {} has zero capacity and will always classify as critical", zone.id);
            }
        }

        let mut attraction_ids = HashSet::new();
        for attraction in &self.attractions {
            if !attraction_ids.insert(attraction.id.as_str()) {
                return Err(CatalogError::DuplicateAttraction(attraction.id.clone()));
            }
            if !zone_ids.contains(attraction.zone.as_str()) {
                return Err(CatalogError::UnknownZone {
                    attraction: attraction.id.clone(),
                    zone: attraction.zone.clone(),
                });
            }
            if !attraction.position.is_on_map() {
                return Err(CatalogError::OffMap(attraction.id.clone()));
            }
            if !attraction.has_throughput() {
                warn!(
                    "Attraction {} has zero throughput and will report maximum wait",
                    attraction.id
                );
            }
        }

        Ok(())
    }
}
