//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings. Freshly created entities get a UUID v4,
//! but persisted documents and seed data may carry any string (e.g. `"1"`
//! or `"initial-contour"`), so no format is enforced on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a factor within a contour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorId(String);

impl FactorId {
    /// Creates a new random FactorId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the identifier is empty.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("factor_id"));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FactorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FactorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a contour (a saved scenario).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContourId(String);

impl ContourId {
    /// Creates a new random ContourId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the identifier is empty.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("contour_id"));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContourId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContourId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a read-only preset in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(String);

impl PresetId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PresetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_id_new_generates_unique_ids() {
        let id1 = FactorId::new();
        let id2 = FactorId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn contour_id_new_generates_unique_ids() {
        let id1 = ContourId::new();
        let id2 = ContourId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn contour_id_parse_accepts_non_uuid_strings() {
        let id = ContourId::parse("initial-contour").unwrap();
        assert_eq!(id.as_str(), "initial-contour");
    }

    #[test]
    fn factor_id_parse_rejects_blank() {
        assert!(FactorId::parse("  ").is_err());
        assert!(FactorId::parse("").is_err());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = FactorId::from("p1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p1\"");

        let restored: ContourId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(restored, ContourId::from("abc"));
    }

    #[test]
    fn display_matches_inner_string() {
        let id = PresetId::from("retail");
        assert_eq!(id.to_string(), "retail");
    }
}
