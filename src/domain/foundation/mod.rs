//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the value-curve domain.

mod errors;
mod ids;
mod level;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ContourId, FactorId, PresetId};
pub use level::{axis_label, level_definition, Level, LevelDefinition, LEVELS, MAX_LEVEL, MIN_LEVEL};
