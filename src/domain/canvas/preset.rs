//! Preset catalog - immutable template factor sets.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Factor;
use crate::domain::foundation::{FactorId, Level, PresetId};

/// A read-only template that can replace a contour's factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: &'static str,
    pub description: &'static str,
    pub factors: Vec<Factor>,
}

impl Preset {
    /// Returns a deep copy of the template factors.
    pub fn factors_copy(&self) -> Vec<Factor> {
        self.factors.clone()
    }
}

fn preset(
    id: &str,
    name: &'static str,
    description: &'static str,
    factors: &[(&str, &str, i64, i64)],
) -> Preset {
    Preset {
        id: PresetId::from(id),
        name,
        description,
        factors: factors
            .iter()
            .map(|(fid, fname, ist, soll)| {
                Factor::new(
                    FactorId::from(*fid),
                    *fname,
                    Level::clamped(*ist),
                    Level::clamped(*soll),
                )
            })
            .collect(),
    }
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        preset(
            "it-standard",
            "Standard Softwaremarkt",
            "Typischer Wettbewerb über Preis und Feature-Listen.",
            &[
                ("p1", "Preis", 5, 2),
                ("p2", "Anzahl Features", 4, 1),
                ("p3", "Customizing", 3, 1),
                ("p4", "UI Design", 1, 5),
                ("p5", "Onboarding Zeit", 4, 1),
            ],
        ),
        preset(
            "retail",
            "Einzelhandel Fokus",
            "Vom Preis- zum Erlebnis-Fokus.",
            &[
                ("r1", "Sortimentstiefe", 4, 2),
                ("r2", "Parkplätze", 3, 1),
                ("r3", "Beratung", 3, 5),
                ("r4", "Atmosphäre", 2, 5),
                ("r5", "Digitale Vernetzung", 1, 4),
            ],
        ),
    ]
});

/// All presets in catalog order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Finds a preset by id.
pub fn find_preset(id: &PresetId) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| &p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_two_presets() {
        let ids: Vec<&str> = presets().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["it-standard", "retail"]);
    }

    #[test]
    fn standard_software_preset_has_five_factors() {
        let preset = find_preset(&PresetId::from("it-standard")).unwrap();
        assert_eq!(preset.name, "Standard Softwaremarkt");
        assert_eq!(preset.factors.len(), 5);
        assert_eq!(preset.factors[3].name, "UI Design");
        assert_eq!(preset.factors[3].soll_value, Level::CHAMPION);
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(find_preset(&PresetId::from("does-not-exist")).is_none());
    }

    #[test]
    fn factors_copy_is_independent() {
        let preset = find_preset(&PresetId::from("retail")).unwrap();
        let mut copy = preset.factors_copy();
        copy[0].name = "Geändert".to_string();

        assert_eq!(preset.factors[0].name, "Sortimentstiefe");
    }
}
