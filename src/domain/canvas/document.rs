//! ContourDocument - the collection of all contours plus the active pointer.
//!
//! This is the pure, in-memory half of the Document Store. It enforces the
//! collection invariants; persistence lives in the application layer.

use super::{seed, Contour, Factor, Preset};
use crate::domain::foundation::{ContourId, FactorId};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The contour was removed.
    Deleted,
    /// Refused because it is the only remaining contour.
    LastContour,
    /// No contour with that id exists.
    NotFound,
}

/// All saved contours and which one is active.
///
/// # Invariants
///
/// - `contours` is never empty
/// - `active_contour()` always resolves to a member of `contours`: the
///   active id is a relation (find-by-id), falling back to the first
///   contour when it dangles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourDocument {
    contours: Vec<Contour>,
    active_contour_id: ContourId,
}

impl ContourDocument {
    /// The document used on first run: one default contour, active.
    pub fn first_run() -> Self {
        let contour = seed::default_contour();
        Self {
            active_contour_id: contour.id.clone(),
            contours: vec![contour],
        }
    }

    /// Reconstitutes a document from persisted parts.
    ///
    /// Returns `None` if `contours` is empty, since an empty collection
    /// cannot satisfy the document invariants.
    pub fn from_parts(contours: Vec<Contour>, active_contour_id: ContourId) -> Option<Self> {
        if contours.is_empty() {
            return None;
        }
        Some(Self {
            contours,
            active_contour_id,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns all contours in creation order.
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns the stored active id (may dangle after `select_contour`).
    pub fn active_contour_id(&self) -> &ContourId {
        &self.active_contour_id
    }

    /// Returns the active contour, or the first contour if the active id
    /// does not resolve.
    pub fn active_contour(&self) -> &Contour {
        let index = self.active_index();
        &self.contours[index]
    }

    /// Returns the contour with the given id.
    pub fn contour(&self, id: &ContourId) -> Option<&Contour> {
        self.contours.iter().find(|c| &c.id == id)
    }

    fn active_index(&self) -> usize {
        self.contours
            .iter()
            .position(|c| c.id == self.active_contour_id)
            .unwrap_or(0)
    }

    fn active_contour_mut(&mut self) -> &mut Contour {
        let index = self.active_index();
        &mut self.contours[index]
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contour operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a new contour seeded with the initial factor set and makes
    /// it active. Returns its id.
    pub fn create_contour(&mut self) -> ContourId {
        let contour = Contour::new(
            ContourId::new(),
            seed::new_contour_name(self.contours.len()),
            seed::initial_factors(),
        );
        let id = contour.id.clone();
        self.contours.push(contour);
        self.active_contour_id = id.clone();
        id
    }

    /// Removes a contour unless it is the last one.
    ///
    /// If the removed contour was active, the first survivor becomes active.
    pub fn delete_contour(&mut self, id: &ContourId) -> DeleteOutcome {
        if self.contours.len() <= 1 {
            return DeleteOutcome::LastContour;
        }
        let Some(index) = self.contours.iter().position(|c| &c.id == id) else {
            return DeleteOutcome::NotFound;
        };

        self.contours.remove(index);
        if &self.active_contour_id == id {
            self.active_contour_id = self.contours[0].id.clone();
        }
        DeleteOutcome::Deleted
    }

    /// Renames the active contour. Any string is accepted.
    pub fn rename_active(&mut self, name: impl Into<String>) {
        self.active_contour_mut().name = name.into();
    }

    /// Points the active id at `id` without checking membership.
    pub fn select_contour(&mut self, id: ContourId) {
        self.active_contour_id = id;
    }

    /// Replaces the active contour's factors with a copy of the preset's.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.active_contour_mut().replace_factors(preset.factors_copy());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Factor operations (active contour only)
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a placeholder factor. Returns its id.
    pub fn add_factor(&mut self) -> FactorId {
        let factor = Factor::placeholder();
        let id = factor.id.clone();
        self.active_contour_mut().push_factor(factor);
        id
    }

    /// Removes a factor by id. Returns true if one was removed.
    pub fn remove_factor(&mut self, id: &FactorId) -> bool {
        self.active_contour_mut().remove_factor(id)
    }

    /// Replaces the factor with `updated.id` wholesale. Returns true if a
    /// factor matched.
    pub fn update_factor(&mut self, updated: Factor) -> bool {
        self.active_contour_mut().replace_factor(updated)
    }
}

impl Default for ContourDocument {
    fn default() -> Self {
        Self::first_run()
    }
}
