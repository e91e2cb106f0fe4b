//! HTTP routes for theme endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_theme, set_theme, toggle_theme, ThemeAppState};

/// Creates the theme router.
pub fn theme_routes(state: ThemeAppState) -> Router {
    Router::new()
        .route("/theme", get(get_theme).put(set_theme))
        .route("/theme/toggle", post(toggle_theme))
        .with_state(state)
}
