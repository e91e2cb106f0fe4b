//! Seed data for first run and new contours.

use super::{Contour, Factor};
use crate::domain::foundation::{ContourId, FactorId, Level};

/// Id of the contour created on first run.
pub const DEFAULT_CONTOUR_ID: &str = "initial-contour";

/// Name of the contour created on first run.
pub const DEFAULT_CONTOUR_NAME: &str = "Mein erster Strategie-Entwurf";

/// Name prefix for contours created through "new contour".
pub const NEW_CONTOUR_NAME_PREFIX: &str = "Neuer Entwurf";

/// The standard initial factor set (fresh copy on every call).
pub fn initial_factors() -> Vec<Factor> {
    [
        ("1", "Preis", 4, 2),
        ("2", "Prestige", 3, 1),
        ("3", "Funktionsumfang", 4, 2),
        ("4", "Benutzerfreundlichkeit", 2, 5),
        ("5", "Geschwindigkeit", 3, 4),
        ("6", "Emotionale Bindung", 1, 5),
    ]
    .into_iter()
    .map(|(id, name, ist, soll)| {
        Factor::new(FactorId::from(id), name, Level::clamped(ist), Level::clamped(soll))
    })
    .collect()
}

/// The single contour present when no persisted document exists.
pub fn default_contour() -> Contour {
    Contour::new(
        ContourId::from(DEFAULT_CONTOUR_ID),
        DEFAULT_CONTOUR_NAME,
        initial_factors(),
    )
}

/// Auto-numbered name for a contour created when `existing` contours exist.
pub fn new_contour_name(existing: usize) -> String {
    format!("{} {}", NEW_CONTOUR_NAME_PREFIX, existing + 1)
}
