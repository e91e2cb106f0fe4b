//! Advice cache key derived from a factor set.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::canvas::Factor;

/// Prefix shared by every advice cache entry.
pub const ADVICE_KEY_PREFIX: &str = "blue_ocean_advice_v3_";

/// Deterministic cache key for the advice of one factor configuration.
///
/// Only `(name, ist, soll)` per factor, in order, feed the key. Goal
/// formulations and measures are deliberately left out, so annotation
/// edits reuse the cached advice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdviceKey(String);

#[derive(Serialize)]
struct FingerprintEntry<'a> {
    n: &'a str,
    i: u8,
    s: u8,
}

impl AdviceKey {
    /// Computes the key for a factor list.
    pub fn for_factors(factors: &[Factor]) -> Self {
        let entries: Vec<FingerprintEntry<'_>> = factors
            .iter()
            .map(|f| FingerprintEntry {
                n: &f.name,
                i: f.ist_value.value(),
                s: f.soll_value.value(),
            })
            .collect();

        // Serializing plain structs of &str and u8 cannot fail.
        let json = serde_json::to_vec(&entries).unwrap_or_default();
        let digest = Sha256::digest(&json);
        Self(format!("{}{:x}", ADVICE_KEY_PREFIX, digest))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
