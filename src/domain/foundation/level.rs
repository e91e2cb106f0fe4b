//! Strategic level value object (0 to 5 ordinal scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest level on the scale.
pub const MIN_LEVEL: u8 = 0;

/// Highest level on the scale.
pub const MAX_LEVEL: u8 = 5;

/// Ordinal strategic level of a factor: 0 (Eliminate) to 5 (Champion).
///
/// Values are ordinal, not magnitudes. Level 3 is the industry baseline
/// ("Branchenniveau") and is drawn as the reference line on value curves.
///
/// # Invariants
///
/// - The inner value is always within `[MIN_LEVEL, MAX_LEVEL]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const ELIMINATE: Level = Level(0);
    pub const REDUCE: Level = Level(1);
    pub const BELOW_INDUSTRY: Level = Level(2);
    pub const INDUSTRY_BASELINE: Level = Level(3);
    pub const RAISE: Level = Level(4);
    pub const CHAMPION: Level = Level(5);

    /// Creates a Level from a raw integer, clamping into `[0, 5]`.
    ///
    /// This is the boundary conversion used for untrusted input
    /// (slider values, HTTP payloads, persisted documents).
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the level-table entry for this level.
    pub fn definition(&self) -> &'static LevelDefinition {
        &LEVELS[self.0 as usize]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        self.definition().label
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INDUSTRY_BASELINE
    }
}

/// Persisted ratings may arrive as floats (`3.0`); they round to the
/// nearest level before clamping.
impl From<f64> for Level {
    fn from(value: f64) -> Self {
        Self::clamped(value.round() as i64)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the static level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelDefinition {
    pub value: u8,
    pub label: &'static str,
    /// Display color as a CSS hex string.
    pub color: &'static str,
}

/// The level table, indexed by level value.
pub static LEVELS: [LevelDefinition; 6] = [
    LevelDefinition { value: 0, label: "Eliminate", color: "#ef4444" },
    LevelDefinition { value: 1, label: "Reduce", color: "#f97316" },
    LevelDefinition { value: 2, label: "Unter Branchenniveau", color: "#eab308" },
    LevelDefinition { value: 3, label: "Branchenniveau", color: "#3b82f6" },
    LevelDefinition { value: 4, label: "Raise (Über Branchenniveau)", color: "#6366f1" },
    LevelDefinition { value: 5, label: "Champion / Innovation", color: "#10b981" },
];

/// Looks up the level-table entry for a raw integer.
///
/// Returns `None` for values outside the table.
pub fn level_definition(value: i64) -> Option<&'static LevelDefinition> {
    LEVELS.iter().find(|l| l.value as i64 == value)
}

/// Axis label for a raw value: the level label, or the number itself.
pub fn axis_label(value: i64) -> String {
    level_definition(value)
        .map(|l| l.label.to_string())
        .unwrap_or_else(|| value.to_string())
}
