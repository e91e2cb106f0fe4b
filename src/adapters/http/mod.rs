//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; `api_router` mounts them all
//! under `/api`.

pub mod canvas;
pub mod theme;

pub use canvas::{canvas_routes, CanvasAppState};
pub use theme::{theme_routes, ThemeAppState};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Builds the complete API router with request tracing.
pub fn api_router(canvas: CanvasAppState, theme: ThemeAppState) -> Router {
    let api = canvas_routes(canvas).merge(theme_routes(theme));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer. No configured origins means any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
