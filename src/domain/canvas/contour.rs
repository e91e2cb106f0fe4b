//! Contour - a named, ordered collection of factors.

use serde::{Deserialize, Serialize};

use super::Factor;
use crate::domain::foundation::{ContourId, FactorId};

/// A named, independent scenario.
///
/// # Invariants
///
/// - Factor order is insertion order and drives chart and display order
/// - Factor names are not required to be unique
/// - An empty factor list is legal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contour {
    pub id: ContourId,
    pub name: String,
    #[serde(default)]
    pub factors: Vec<Factor>,
}

impl Contour {
    /// Creates a contour with the given factors.
    pub fn new(id: ContourId, name: impl Into<String>, factors: Vec<Factor>) -> Self {
        Self {
            id,
            name: name.into(),
            factors,
        }
    }

    /// Returns the factors in display order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Returns the factor with the given id.
    pub fn factor(&self, id: &FactorId) -> Option<&Factor> {
        self.factors.iter().find(|f| &f.id == id)
    }

    /// Appends a factor at the end.
    pub fn push_factor(&mut self, factor: Factor) {
        self.factors.push(factor);
    }

    /// Removes the factor with the given id. Returns true if one was removed.
    pub fn remove_factor(&mut self, id: &FactorId) -> bool {
        let before = self.factors.len();
        self.factors.retain(|f| &f.id != id);
        self.factors.len() != before
    }

    /// Replaces the factor whose id matches `updated.id`, keeping its
    /// position. Returns true if a factor was replaced.
    pub fn replace_factor(&mut self, updated: Factor) -> bool {
        match self.factors.iter_mut().find(|f| f.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Replaces the entire factor list.
    pub fn replace_factors(&mut self, factors: Vec<Factor>) {
        self.factors = factors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Level;

    fn contour_with(names: &[&str]) -> Contour {
        let factors = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                Factor::new(
                    FactorId::from(i.to_string().as_str()),
                    *n,
                    Level::INDUSTRY_BASELINE,
                    Level::INDUSTRY_BASELINE,
                )
            })
            .collect();
        Contour::new(ContourId::new(), "Test", factors)
    }

    #[test]
    fn replace_factor_keeps_position() {
        let mut contour = contour_with(&["A", "B", "C"]);
        let updated = contour.factors[1].clone().with_name("B2").with_soll(Level::CHAMPION);

        assert!(contour.replace_factor(updated));

        let names: Vec<&str> = contour.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B2", "C"]);
        assert_eq!(contour.factors[1].soll_value, Level::CHAMPION);
    }

    #[test]
    fn replace_unknown_factor_is_noop() {
        let mut contour = contour_with(&["A"]);
        let before = contour.clone();

        assert!(!contour.replace_factor(Factor::placeholder()));
        assert_eq!(contour, before);
    }

    #[test]
    fn remove_factor_can_empty_the_contour() {
        let mut contour = contour_with(&["A"]);
        let id = contour.factors[0].id.clone();

        assert!(contour.remove_factor(&id));
        assert!(contour.factors().is_empty());
        assert!(!contour.remove_factor(&id));
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let contour = contour_with(&["Preis", "Preis"]);
        assert_eq!(contour.factors().len(), 2);
    }

    #[test]
    fn deserializes_without_factors_field() {
        let json = r#"{"id":"c1","name":"Leer"}"#;
        let contour: Contour = serde_json::from_str(json).unwrap();
        assert!(contour.factors.is_empty());
    }
}
