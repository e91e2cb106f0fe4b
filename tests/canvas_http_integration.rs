//! Integration tests for the canvas HTTP API.
//!
//! Drives the full router with in-memory storage and the mock provider:
//! 1. Contour lifecycle (create, select, rename, delete guard)
//! 2. Factor editing with level clamping
//! 3. Presets, catalogs and derived views
//! 4. Advice caching and fallback
//! 5. Theme preference

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use value_curve::adapters::ai::{MockAIProvider, MockError};
use value_curve::adapters::http::{api_router, CanvasAppState, ThemeAppState};
use value_curve::adapters::storage::InMemoryKeyValueStore;
use value_curve::application::{AdviceService, DocumentStore, ThemeService};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    provider: MockAIProvider,
}

async fn test_app(provider: MockAIProvider) -> TestApp {
    let durable = Arc::new(InMemoryKeyValueStore::new());
    let session = Arc::new(InMemoryKeyValueStore::new());

    let documents = Arc::new(DocumentStore::load(durable.clone()).await);
    let advice = Arc::new(AdviceService::new(Arc::new(provider.clone()), session));
    let theme = Arc::new(ThemeService::load(durable, None).await);

    TestApp {
        router: api_router(
            CanvasAppState::new(documents, advice),
            ThemeAppState::new(theme),
        ),
        provider,
    }
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }
}

fn factor_names(canvas: &Value) -> Vec<String> {
    canvas["active_contour"]["factors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Contour lifecycle
// =============================================================================

#[tokio::test]
async fn first_run_canvas_has_default_contour() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, canvas) = app.get("/api/canvas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(canvas["contours"].as_array().unwrap().len(), 1);
    assert_eq!(canvas["active_contour_id"], "initial-contour");
    assert_eq!(canvas["active_contour"]["name"], "Mein erster Strategie-Entwurf");
    assert_eq!(
        factor_names(&canvas),
        [
            "Preis",
            "Prestige",
            "Funktionsumfang",
            "Benutzerfreundlichkeit",
            "Geschwindigkeit",
            "Emotionale Bindung"
        ]
    );
    assert!(canvas["advice"].is_null());
}

#[tokio::test]
async fn create_contour_adds_and_activates_second_draft() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, created) = app.send("POST", "/api/contours", None).await;

    assert_eq!(status, StatusCode::CREATED);
    let canvas = &created["canvas"];
    assert_eq!(canvas["contours"].as_array().unwrap().len(), 2);
    assert_eq!(canvas["active_contour_id"], created["id"]);
    assert_ne!(created["id"], "initial-contour");
    assert_eq!(canvas["active_contour"]["name"], "Neuer Entwurf 2");
    assert_eq!(factor_names(canvas).len(), 6);
}

#[tokio::test]
async fn deleting_the_only_contour_changes_nothing() {
    let app = test_app(MockAIProvider::new()).await;
    let (_, before) = app.get("/api/canvas").await;

    let (status, after) = app
        .send("DELETE", "/api/contours/initial-contour", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn deleting_active_contour_selects_first_survivor() {
    let app = test_app(MockAIProvider::new()).await;
    let (_, created) = app.send("POST", "/api/contours", None).await;
    let new_id = created["id"].as_str().unwrap().to_string();

    let (_, canvas) = app
        .send("DELETE", &format!("/api/contours/{}", new_id), None)
        .await;

    assert_eq!(canvas["contours"].as_array().unwrap().len(), 1);
    assert_eq!(canvas["active_contour_id"], "initial-contour");
}

#[tokio::test]
async fn deleting_inactive_contour_keeps_active_id() {
    let app = test_app(MockAIProvider::new()).await;
    let (_, created) = app.send("POST", "/api/contours", None).await;

    let (_, canvas) = app
        .send("DELETE", "/api/contours/initial-contour", None)
        .await;

    assert_eq!(canvas["contours"].as_array().unwrap().len(), 1);
    assert_eq!(canvas["active_contour_id"], created["id"]);
}

#[tokio::test]
async fn select_and_rename_target_the_active_contour() {
    let app = test_app(MockAIProvider::new()).await;
    app.send("POST", "/api/contours", None).await;

    app.send("PUT", "/api/contours/active", Some(json!({"id": "initial-contour"})))
        .await;
    let (status, canvas) = app
        .send("PATCH", "/api/contours/active", Some(json!({"name": "Preisstrategie"})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(canvas["active_contour"]["id"], "initial-contour");
    assert_eq!(canvas["contours"][0]["name"], "Preisstrategie");
    assert_eq!(canvas["contours"][1]["name"], "Neuer Entwurf 2");
}

#[tokio::test]
async fn selecting_unknown_id_falls_back_to_first_contour() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, canvas) = app
        .send("PUT", "/api/contours/active", Some(json!({"id": "ghost"})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(canvas["active_contour_id"], "ghost");
    assert_eq!(canvas["active_contour"]["id"], "initial-contour");
}

#[tokio::test]
async fn selecting_blank_id_is_rejected() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, body) = app
        .send("PUT", "/api/contours/active", Some(json!({"id": "  "})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].is_string());
}

// =============================================================================
// Factor editing
// =============================================================================

#[tokio::test]
async fn add_factor_appends_baseline_placeholder() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, created) = app
        .send("POST", "/api/contours/active/factors", None)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let factors = created["canvas"]["active_contour"]["factors"].as_array().unwrap();
    assert_eq!(factors.len(), 7);
    assert_eq!(factors[6]["id"], created["id"]);
    assert_eq!(factors[6]["name"], "Neuer Berührungspunkt");
    assert_eq!(factors[6]["ist_value"], 3);
    assert_eq!(factors[6]["soll_value"], 3);
}

#[tokio::test]
async fn update_factor_clamps_levels_and_keeps_siblings() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, canvas) = app
        .send(
            "PUT",
            "/api/contours/active/factors/2",
            Some(json!({
                "name": "Markenimage",
                "ist_value": 7,
                "soll_value": -1,
                "goal_formulation": "Premium wahrgenommen werden"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let factors = canvas["active_contour"]["factors"].as_array().unwrap();
    assert_eq!(factors[1]["name"], "Markenimage");
    assert_eq!(factors[1]["ist_value"], 5);
    assert_eq!(factors[1]["soll_value"], 0);
    assert_eq!(factors[1]["goal_formulation"], "Premium wahrgenommen werden");
    assert_eq!(factors[0]["name"], "Preis");
    assert_eq!(factors[2]["name"], "Funktionsumfang");
}

#[tokio::test]
async fn update_unknown_factor_is_a_no_op() {
    let app = test_app(MockAIProvider::new()).await;
    let (_, before) = app.get("/api/canvas").await;

    let (status, after) = app
        .send(
            "PUT",
            "/api/contours/active/factors/unknown",
            Some(json!({"name": "X", "ist_value": 1, "soll_value": 1})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn remove_factor_can_empty_the_contour() {
    let app = test_app(MockAIProvider::new()).await;

    let mut canvas = Value::Null;
    for id in ["1", "2", "3", "4", "5", "6"] {
        canvas = app
            .send("DELETE", &format!("/api/contours/active/factors/{}", id), None)
            .await
            .1;
    }

    assert!(factor_names(&canvas).is_empty());
    let (_, chart) = app.get("/api/contours/active/chart").await;
    assert!(chart["rows"].as_array().unwrap().is_empty());
}

// =============================================================================
// Presets, catalogs and views
// =============================================================================

#[tokio::test]
async fn apply_standard_preset_replaces_factors() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, canvas) = app
        .send(
            "POST",
            "/api/contours/active/preset",
            Some(json!({"preset_id": "it-standard"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        factor_names(&canvas),
        ["Preis", "Anzahl Features", "Customizing", "UI Design", "Onboarding Zeit"]
    );
}

#[tokio::test]
async fn editing_applied_preset_leaves_catalog_intact() {
    let app = test_app(MockAIProvider::new()).await;
    app.send(
        "POST",
        "/api/contours/active/preset",
        Some(json!({"preset_id": "it-standard"})),
    )
    .await;

    app.send(
        "PUT",
        "/api/contours/active/factors/p1",
        Some(json!({"name": "Kosten", "ist_value": 0, "soll_value": 0})),
    )
    .await;

    let (_, presets) = app.get("/api/presets").await;
    assert_eq!(presets[0]["factors"][0]["name"], "Preis");
    assert_eq!(presets[0]["factors"][0]["ist_value"], 5);
}

#[tokio::test]
async fn unknown_preset_is_not_found() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, body) = app
        .send(
            "POST",
            "/api/contours/active/preset",
            Some(json!({"preset_id": "nope"})),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PRESET_NOT_FOUND");
}

#[tokio::test]
async fn catalogs_list_presets_and_levels() {
    let app = test_app(MockAIProvider::new()).await;

    let (_, presets) = app.get("/api/presets").await;
    let (_, levels) = app.get("/api/levels").await;

    assert_eq!(presets.as_array().unwrap().len(), 2);
    assert_eq!(presets[1]["name"], "Einzelhandel Fokus");
    assert_eq!(levels.as_array().unwrap().len(), 6);
    assert_eq!(levels[3]["label"], "Branchenniveau");
    assert_eq!(levels[3]["industry_baseline"], true);
}

#[tokio::test]
async fn chart_carries_rows_axis_and_reference_line() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, chart) = app.get("/api/contours/active/chart").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chart["rows"][0], json!({"name": "Preis", "ist": 4, "soll": 2}));
    assert_eq!(chart["y_axis"].as_array().unwrap().len(), 6);
    assert_eq!(chart["reference_line"]["level"], 3);
    assert_eq!(chart["reference_line"]["label"], "Branchenstandard");
}

#[tokio::test]
async fn details_list_only_annotated_factors() {
    let app = test_app(MockAIProvider::new()).await;
    let (_, empty) = app.get("/api/contours/active/details").await;
    assert!(empty.as_array().unwrap().is_empty());

    app.send(
        "PUT",
        "/api/contours/active/factors/4",
        Some(json!({
            "name": "Benutzerfreundlichkeit",
            "ist_value": 2,
            "soll_value": 5,
            "measures": "Onboarding neu gestalten"
        })),
    )
    .await;
    let (_, details) = app.get("/api/contours/active/details").await;

    let details = details.as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["name"], "Benutzerfreundlichkeit");
    assert_eq!(details[0]["measures"], "Onboarding neu gestalten");
    assert!(details[0].get("goal_formulation").is_none());
}

// =============================================================================
// Advice
// =============================================================================

#[tokio::test]
async fn advice_is_cached_per_factor_set() {
    let app = test_app(MockAIProvider::new().with_response("Wert entsteht bei UX.")).await;

    let (_, idle) = app.get("/api/advice").await;
    assert_eq!(idle["status"], "idle");

    let (status, first) = app.send("POST", "/api/advice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["advice"], "Wert entsteht bei UX.");
    assert_eq!(first["source"], "provider");

    let (_, second) = app.send("POST", "/api/advice", None).await;
    assert_eq!(second["source"], "cache");
    assert_eq!(second["cache_key"], first["cache_key"]);
    assert_eq!(app.provider.call_count(), 1);

    let (_, ready) = app.get("/api/advice").await;
    assert_eq!(ready["status"], "ready");
    let (_, canvas) = app.get("/api/canvas").await;
    assert_eq!(canvas["advice"], "Wert entsteht bei UX.");
}

#[tokio::test]
async fn rating_change_hides_cached_advice_until_restored() {
    let app = test_app(MockAIProvider::new().with_response("Analyse")).await;
    app.send("POST", "/api/advice", None).await;

    let (_, changed) = app
        .send(
            "PUT",
            "/api/contours/active/factors/1",
            Some(json!({"name": "Preis", "ist_value": 5, "soll_value": 2})),
        )
        .await;
    assert!(changed["advice"].is_null());

    let (_, restored) = app
        .send(
            "PUT",
            "/api/contours/active/factors/1",
            Some(json!({"name": "Preis", "ist_value": 4, "soll_value": 2, "goal_formulation": "Fair"})),
        )
        .await;
    assert_eq!(restored["advice"], "Analyse");
}

#[tokio::test]
async fn provider_failure_returns_fallback_message() {
    let app = test_app(MockAIProvider::new().with_error(MockError::Network {
        message: "offline".to_string(),
    }))
    .await;

    let (status, body) = app.send("POST", "/api/advice", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["advice"],
        "Entschuldigung, die Analyse konnte nicht geladen werden."
    );
    assert_eq!(body["source"], "fallback");
    let (_, canvas) = app.get("/api/canvas").await;
    assert!(canvas["advice"].is_null());
}

// =============================================================================
// Theme
// =============================================================================

#[tokio::test]
async fn theme_defaults_to_light_and_toggles() {
    let app = test_app(MockAIProvider::new()).await;

    let (_, initial) = app.get("/api/theme").await;
    assert_eq!(initial["theme"], "light");

    let (_, toggled) = app.send("POST", "/api/theme/toggle", None).await;
    assert_eq!(toggled["theme"], "dark");

    let (_, set) = app.send("PUT", "/api/theme", Some(json!({"theme": "light"}))).await;
    assert_eq!(set["theme"], "light");
}

#[tokio::test]
async fn invalid_theme_is_rejected() {
    let app = test_app(MockAIProvider::new()).await;

    let (status, body) = app
        .send("PUT", "/api/theme", Some(json!({"theme": "sepia"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}
