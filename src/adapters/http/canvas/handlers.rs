//! HTTP handlers for canvas endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::application::{AdviceService, DocumentStore};
use crate::domain::canvas::{presets, view, CanvasError, ContourDocument};
use crate::domain::foundation::{ContourId, FactorId, PresetId, LEVELS};

use super::dto::{
    AdviceResponse, AdviceStatusResponse, ApplyPresetRequest, CanvasResponse, CreatedResponse,
    ErrorResponse, LevelResponse, PresetResponse, RenameContourRequest, SelectContourRequest,
    UpdateFactorRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CanvasAppState {
    pub documents: Arc<DocumentStore>,
    pub advice: Arc<AdviceService>,
}

impl CanvasAppState {
    pub fn new(documents: Arc<DocumentStore>, advice: Arc<AdviceService>) -> Self {
        Self { documents, advice }
    }

    /// Builds a snapshot carrying the cached advice for the active factors.
    async fn canvas(&self, document: &ContourDocument) -> CanvasResponse {
        let advice = self.advice.cached(document.active_contour().factors()).await;
        CanvasResponse::new(document, advice)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Canvas and contour handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/canvas
pub async fn get_canvas(State(state): State<CanvasAppState>) -> Response {
    let document = state.documents.snapshot().await;
    Json(state.canvas(&document).await).into_response()
}

/// POST /api/contours
pub async fn create_contour(State(state): State<CanvasAppState>) -> Response {
    let update = state.documents.create_contour().await;
    let response = CreatedResponse {
        id: update.outcome.to_string(),
        canvas: state.canvas(&update.document).await,
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

/// DELETE /api/contours/:id
///
/// Deleting the last contour or an unknown id leaves the canvas unchanged.
pub async fn delete_contour(
    State(state): State<CanvasAppState>,
    Path(id): Path<String>,
) -> Response {
    let update = state.documents.delete_contour(&ContourId::from(id.as_str())).await;
    debug!(outcome = ?update.outcome, "Delete contour handled");
    Json(state.canvas(&update.document).await).into_response()
}

/// PUT /api/contours/active
pub async fn select_contour(
    State(state): State<CanvasAppState>,
    Json(request): Json<SelectContourRequest>,
) -> Response {
    let id = match ContourId::parse(request.id) {
        Ok(id) => id,
        Err(e) => return handle_canvas_error(e.into()),
    };
    let update = state.documents.select_contour(id).await;
    Json(state.canvas(&update.document).await).into_response()
}

/// PATCH /api/contours/active
pub async fn rename_contour(
    State(state): State<CanvasAppState>,
    Json(request): Json<RenameContourRequest>,
) -> Response {
    let update = state.documents.rename_active(request.name).await;
    Json(state.canvas(&update.document).await).into_response()
}

/// POST /api/contours/active/preset
pub async fn apply_preset(
    State(state): State<CanvasAppState>,
    Json(request): Json<ApplyPresetRequest>,
) -> Response {
    let preset_id = PresetId::from(request.preset_id.as_str());
    match state.documents.apply_preset(&preset_id).await {
        Ok(update) => Json(state.canvas(&update.document).await).into_response(),
        Err(e) => handle_canvas_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Factor handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/contours/active/factors
pub async fn add_factor(State(state): State<CanvasAppState>) -> Response {
    let update = state.documents.add_factor().await;
    let response = CreatedResponse {
        id: update.outcome.to_string(),
        canvas: state.canvas(&update.document).await,
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

/// PUT /api/contours/active/factors/:id
///
/// Whole-record replacement; an unknown id is a no-op.
pub async fn update_factor(
    State(state): State<CanvasAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateFactorRequest>,
) -> Response {
    let factor = request.into_factor(FactorId::from(id.as_str()));
    let update = state.documents.update_factor(factor).await;
    if !update.outcome {
        debug!(factor_id = %id, "Update ignored, factor not in active contour");
    }
    Json(state.canvas(&update.document).await).into_response()
}

/// DELETE /api/contours/active/factors/:id
pub async fn remove_factor(
    State(state): State<CanvasAppState>,
    Path(id): Path<String>,
) -> Response {
    let update = state.documents.remove_factor(&FactorId::from(id.as_str())).await;
    Json(state.canvas(&update.document).await).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog and derived views
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/presets
pub async fn list_presets() -> Response {
    let response: Vec<PresetResponse> = presets().iter().map(PresetResponse::from).collect();
    Json(response).into_response()
}

/// GET /api/levels
pub async fn list_levels() -> Response {
    let response: Vec<LevelResponse> = LEVELS.iter().map(LevelResponse::from).collect();
    Json(response).into_response()
}

/// GET /api/contours/active/chart
pub async fn get_chart(State(state): State<CanvasAppState>) -> Response {
    let factors = state.documents.active_factors().await;
    Json(view::value_curve_chart(&factors)).into_response()
}

/// GET /api/contours/active/details
pub async fn get_details(State(state): State<CanvasAppState>) -> Response {
    let factors = state.documents.active_factors().await;
    Json(view::factor_details(&factors)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Advice handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/advice
pub async fn get_advice_status(State(state): State<CanvasAppState>) -> Response {
    let factors = state.documents.active_factors().await;
    let response = AdviceStatusResponse {
        status: state.advice.status(&factors).await,
        advice: state.advice.cached(&factors).await,
    };
    Json(response).into_response()
}

/// POST /api/advice
///
/// Always 200: provider failures return the fallback text.
pub async fn request_advice(State(state): State<CanvasAppState>) -> Response {
    let document = state.documents.snapshot().await;
    let active = document.active_contour();
    let outcome = state
        .advice
        .request(active.factors(), Some(active.id.clone()))
        .await;
    Json(AdviceResponse::from(outcome)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_canvas_error(error: CanvasError) -> Response {
    let code = error.code().to_string();
    match error {
        CanvasError::PresetNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(
                ErrorResponse::new(code, format!("Preset not found: {}", id))
                    .with_details(serde_json::json!({ "preset_id": id.as_str() })),
            ),
        )
            .into_response(),
        CanvasError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(code, e.to_string())),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn preset_not_found_maps_to_404() {
        let response = handle_canvas_error(CanvasError::preset_not_found(PresetId::from("x")));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_canvas_error(ValidationError::empty_field("id").into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
