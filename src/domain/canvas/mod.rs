//! Canvas module - contours, factors, presets and their derived views.
//!
//! # Components
//!
//! - `Factor` - one comparison dimension with IST and SOLL levels
//! - `Contour` - a named, ordered collection of factors
//! - `ContourDocument` - every contour plus the active pointer
//! - `Preset` - immutable template factor sets
//! - `view` - chart rows, level axis and strategy-detail filter

mod contour;
mod document;
mod errors;
mod factor;
mod preset;
pub mod seed;
mod theme;
pub mod view;

pub use contour::Contour;
pub use document::{ContourDocument, DeleteOutcome};
pub use errors::CanvasError;
pub use factor::{Factor, DEFAULT_FACTOR_NAME};
pub use preset::{find_preset, presets, Preset};
pub use theme::ThemePreference;
pub use view::{ChartRow, FactorDetail, ValueCurveChart};
