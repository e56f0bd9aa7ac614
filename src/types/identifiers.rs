//! Identifier types for the park telemetry simulator
//!
//! Catalog entities are keyed by short stable slugs (`coaster`, `thrill`) rather than
//! random identifiers, so the same catalog yields the same ids on every tick.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an attraction in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttractionId(pub String);

impl AttractionId {
    /// Create an attraction id from a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Borrow the slug
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttractionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for AttractionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Identifier of a park zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub String);

impl ZoneId {
    /// Create a zone id from a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Borrow the slug
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for ZoneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Identifier of a generated alert, derived from its template index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub String);

impl AlertId {
    /// Id for the alert generated from template `index`
    pub fn from_index(index: usize) -> Self {
        Self(format!("alert-{}", index))
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
