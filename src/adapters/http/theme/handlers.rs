//! HTTP handlers for theme endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::canvas::ErrorResponse;
use crate::application::ThemeService;
use crate::domain::canvas::ThemePreference;
use crate::domain::foundation::ErrorCode;

use super::dto::{SetThemeRequest, ThemeResponse};

#[derive(Clone)]
pub struct ThemeAppState {
    pub theme: Arc<ThemeService>,
}

impl ThemeAppState {
    pub fn new(theme: Arc<ThemeService>) -> Self {
        Self { theme }
    }
}

/// GET /api/theme
pub async fn get_theme(State(state): State<ThemeAppState>) -> Response {
    Json(ThemeResponse {
        theme: state.theme.current().await,
    })
    .into_response()
}

/// PUT /api/theme
pub async fn set_theme(
    State(state): State<ThemeAppState>,
    Json(request): Json<SetThemeRequest>,
) -> Response {
    match request.theme.parse::<ThemePreference>() {
        Ok(theme) => Json(ThemeResponse {
            theme: state.theme.set(theme).await,
        })
        .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(ErrorCode::from(&e).to_string(), e.to_string())),
        )
            .into_response(),
    }
}

/// POST /api/theme/toggle
pub async fn toggle_theme(State(state): State<ThemeAppState>) -> Response {
    Json(ThemeResponse {
        theme: state.theme.toggle().await,
    })
    .into_response()
}
