//! Canvas-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, PresetId, ValidationError};

/// Errors raised by canvas operations.
///
/// Guarded preconditions (deleting the last contour, unknown factor ids)
/// are no-ops, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// No preset with this id exists in the catalog.
    #[error("Preset not found: {0}")]
    PresetNotFound(PresetId),

    /// Input failed value-object validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CanvasError {
    pub fn preset_not_found(id: PresetId) -> Self {
        CanvasError::PresetNotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CanvasError::PresetNotFound(_) => ErrorCode::PresetNotFound,
            CanvasError::Validation(err) => ErrorCode::from(err),
        }
    }
}
