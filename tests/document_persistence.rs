//! Persistence across restarts using the file-backed store.

use std::sync::Arc;
use tempfile::TempDir;

use value_curve::adapters::storage::FileKeyValueStore;
use value_curve::application::{DocumentStore, ThemeService, ACTIVE_ID_KEY, CONTOURS_KEY};
use value_curve::domain::canvas::ThemePreference;
use value_curve::domain::foundation::Level;
use value_curve::ports::KeyValueStore;

fn file_store(dir: &TempDir) -> Arc<FileKeyValueStore> {
    Arc::new(FileKeyValueStore::new(dir.path().to_path_buf()))
}

#[tokio::test]
async fn edits_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let created_id = {
        let store = DocumentStore::load(file_store(&dir)).await;
        let id = store.create_contour().await.outcome;
        store.rename_active("Zweiter Versuch".to_string()).await;
        let factor = store.active_factors().await[0]
            .clone()
            .with_ist(Level::CHAMPION)
            .with_measures("Preise senken");
        store.update_factor(factor).await;
        id
    };

    let reloaded = DocumentStore::load(file_store(&dir)).await;
    let doc = reloaded.snapshot().await;

    assert_eq!(doc.contours().len(), 2);
    assert_eq!(doc.active_contour_id(), &created_id);
    assert_eq!(doc.active_contour().name, "Zweiter Versuch");
    let first = &doc.active_contour().factors()[0];
    assert_eq!(first.ist_value, Level::CHAMPION);
    assert_eq!(first.measures.as_deref(), Some("Preise senken"));
}

#[tokio::test]
async fn malformed_contours_fall_back_to_first_run() {
    let dir = TempDir::new().unwrap();
    let storage = file_store(&dir);
    storage.set(CONTOURS_KEY, "{not json").await.unwrap();
    storage.set(ACTIVE_ID_KEY, "ghost").await.unwrap();

    let store = DocumentStore::load(storage.clone()).await;
    let doc = store.snapshot().await;

    assert_eq!(doc.contours().len(), 1);
    assert_eq!(doc.active_contour_id().as_str(), "initial-contour");

    // The fallback document replaces the unreadable data.
    let raw = storage.get(CONTOURS_KEY).await.unwrap().unwrap();
    assert!(raw.contains("Mein erster Strategie-Entwurf"));
}

#[tokio::test]
async fn persisted_document_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let storage = file_store(&dir);

    DocumentStore::load(storage.clone()).await;

    let raw = storage.get(CONTOURS_KEY).await.unwrap().unwrap();
    assert!(raw.contains("\"istValue\""));
    assert!(raw.contains("\"sollValue\""));
    assert_eq!(
        storage.get(ACTIVE_ID_KEY).await.unwrap().as_deref(),
        Some("initial-contour")
    );
}

#[tokio::test]
async fn theme_preference_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    ThemeService::load(file_store(&dir), None)
        .await
        .set(ThemePreference::Dark)
        .await;

    let reloaded = ThemeService::load(file_store(&dir), Some(ThemePreference::Light)).await;
    assert_eq!(reloaded.current().await, ThemePreference::Dark);
}

#[tokio::test]
async fn float_ratings_in_stored_document_are_kept() {
    let dir = TempDir::new().unwrap();
    let storage = file_store(&dir);
    storage
        .set(
            CONTOURS_KEY,
            r#"[{"id":"c1","name":"Import","factors":[{"id":"f1","name":"Preis","istValue":3.0,"sollValue":4.6}]}]"#,
        )
        .await
        .unwrap();
    storage.set(ACTIVE_ID_KEY, "c1").await.unwrap();

    let doc = DocumentStore::load(storage).await.snapshot().await;

    assert_eq!(doc.active_contour().name, "Import");
    let factor = &doc.active_contour().factors()[0];
    assert_eq!(factor.ist_value, Level::INDUSTRY_BASELINE);
    assert_eq!(factor.soll_value, Level::CHAMPION);
}
