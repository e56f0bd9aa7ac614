//! Static zone catalog entries

use crate::types::{LocalizedText, ZoneId};
use serde::{Deserialize, Serialize};

/// Configuration-time description of a park zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Unique identifier for the zone
    pub id: ZoneId,
    /// Display name
    pub name: LocalizedText,
    /// Rated visitor capacity
    pub capacity: u32,
}

impl ZoneSpec {
    /// Create a zone spec
    pub fn new(id: impl Into<String>, name: LocalizedText, capacity: u32) -> Self {
        Self { id: ZoneId::new(id), name, capacity }
    }
}
