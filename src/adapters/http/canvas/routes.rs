//! HTTP routes for canvas endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_factor, apply_preset, create_contour, delete_contour, get_advice_status, get_canvas,
    get_chart, get_details, list_levels, list_presets, remove_factor, rename_contour,
    request_advice, select_contour, update_factor, CanvasAppState,
};

/// Creates the canvas router with all endpoints.
///
/// # Routes
///
/// - `GET /canvas` - Full snapshot with cached advice
/// - `POST /contours` - Create a contour and make it active
/// - `DELETE /contours/:id` - Delete a contour (never the last one)
/// - `PUT /contours/active` - Select the active contour
/// - `PATCH /contours/active` - Rename the active contour
/// - `POST /contours/active/preset` - Replace factors with a preset
/// - `POST /contours/active/factors` - Append a default factor
/// - `PUT /contours/active/factors/:id` - Replace a factor
/// - `DELETE /contours/active/factors/:id` - Remove a factor
/// - `GET /contours/active/chart` - Value curve chart view
/// - `GET /contours/active/details` - Strategy-detail summary
/// - `GET /presets`, `GET /levels` - Static catalogs
/// - `GET /advice`, `POST /advice` - Advice status and request
pub fn canvas_routes(state: CanvasAppState) -> Router {
    Router::new()
        .route("/canvas", get(get_canvas))
        .route("/contours", post(create_contour))
        .route(
            "/contours/active",
            put(select_contour).patch(rename_contour),
        )
        .route("/contours/active/preset", post(apply_preset))
        .route("/contours/active/factors", post(add_factor))
        .route(
            "/contours/active/factors/:id",
            put(update_factor).delete(remove_factor),
        )
        .route("/contours/active/chart", get(get_chart))
        .route("/contours/active/details", get(get_details))
        .route("/contours/:id", delete(delete_contour))
        .route("/presets", get(list_presets))
        .route("/levels", get(list_levels))
        .route("/advice", get(get_advice_status).post(request_advice))
        .with_state(state)
}
