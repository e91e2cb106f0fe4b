//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, levels, errors)
//! - `canvas` - Contours, factors, presets and derived chart views
//! - `advice` - Advice cache fingerprint and prompt template

pub mod advice;
pub mod canvas;
pub mod foundation;
