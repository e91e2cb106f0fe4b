//! DocumentStore - owns the contour document and keeps it persisted.
//!
//! Every mutation runs against the in-memory `ContourDocument` and then
//! rewrites both storage keys in full. Write failures are logged and
//! swallowed; the in-memory state stays authoritative.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::canvas::{
    find_preset, seed, CanvasError, Contour, ContourDocument, DeleteOutcome, Factor,
};
use crate::domain::foundation::{ContourId, FactorId, PresetId};
use crate::ports::KeyValueStore;

/// Storage key of the serialized contour list.
pub const CONTOURS_KEY: &str = "strategic_contours_v2";

/// Storage key of the active contour id (plain string).
pub const ACTIVE_ID_KEY: &str = "strategic_active_id_v2";

/// Result of a mutation: its outcome plus the document it produced.
#[derive(Debug, Clone)]
pub struct DocumentUpdate<T> {
    pub outcome: T,
    pub document: ContourDocument,
}

/// Application service around the contour document.
pub struct DocumentStore {
    document: RwLock<ContourDocument>,
    storage: Arc<dyn KeyValueStore>,
}

impl DocumentStore {
    /// Loads the document from storage, falling back to the first-run
    /// document when the stored list is absent, malformed or empty.
    ///
    /// Never fails. The resolved document is written back immediately.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let contours = match storage.get(CONTOURS_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Contour>>(&raw) {
                Ok(contours) => Some(contours),
                Err(e) => {
                    warn!(error = %e, "Stored contours are malformed, using defaults");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored contours, using defaults");
                None
            }
        };

        let active_id = match storage.get(ACTIVE_ID_KEY).await {
            Ok(Some(raw)) if !raw.is_empty() => ContourId::from(raw.as_str()),
            Ok(_) => ContourId::from(seed::DEFAULT_CONTOUR_ID),
            Err(e) => {
                warn!(error = %e, "Failed to read active contour id");
                ContourId::from(seed::DEFAULT_CONTOUR_ID)
            }
        };

        let document = contours
            .and_then(|contours| ContourDocument::from_parts(contours, active_id))
            .unwrap_or_else(ContourDocument::first_run);

        info!(
            contours = document.contours().len(),
            active = %document.active_contour().id,
            "Contour document loaded"
        );

        persist(storage.as_ref(), &document).await;

        Self {
            document: RwLock::new(document),
            storage,
        }
    }

    /// Returns a copy of the current document.
    pub async fn snapshot(&self) -> ContourDocument {
        self.document.read().await.clone()
    }

    /// Returns a copy of the active contour's factors.
    pub async fn active_factors(&self) -> Vec<Factor> {
        self.document.read().await.active_contour().factors().to_vec()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Contour operations
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn create_contour(&self) -> DocumentUpdate<ContourId> {
        let update = self.mutate(|doc| doc.create_contour()).await;
        debug!(contour_id = %update.outcome, "Contour created");
        update
    }

    /// Deletes a contour. Refused and unknown deletes leave storage untouched.
    pub async fn delete_contour(&self, id: &ContourId) -> DocumentUpdate<DeleteOutcome> {
        let mut document = self.document.write().await;
        let outcome = document.delete_contour(id);

        match outcome {
            DeleteOutcome::Deleted => {
                persist(self.storage.as_ref(), &*document).await;
                debug!(contour_id = %id, "Contour deleted");
            }
            DeleteOutcome::LastContour => {
                debug!(contour_id = %id, "Refusing to delete the last contour");
            }
            DeleteOutcome::NotFound => {
                debug!(contour_id = %id, "Delete ignored, contour not found");
            }
        }

        DocumentUpdate {
            outcome,
            document: document.clone(),
        }
    }

    pub async fn rename_active(&self, name: String) -> DocumentUpdate<()> {
        self.mutate(|doc| doc.rename_active(name)).await
    }

    pub async fn select_contour(&self, id: ContourId) -> DocumentUpdate<()> {
        self.mutate(|doc| doc.select_contour(id)).await
    }

    /// Replaces the active contour's factors with a copy of a catalog preset.
    pub async fn apply_preset(
        &self,
        preset_id: &PresetId,
    ) -> Result<DocumentUpdate<()>, CanvasError> {
        let preset =
            find_preset(preset_id).ok_or_else(|| CanvasError::preset_not_found(preset_id.clone()))?;
        let update = self.mutate(|doc| doc.apply_preset(preset)).await;
        debug!(preset_id = %preset_id, "Preset applied");
        Ok(update)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Factor operations (active contour)
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn add_factor(&self) -> DocumentUpdate<FactorId> {
        self.mutate(|doc| doc.add_factor()).await
    }

    pub async fn remove_factor(&self, id: &FactorId) -> DocumentUpdate<bool> {
        self.mutate(|doc| doc.remove_factor(id)).await
    }

    pub async fn update_factor(&self, updated: Factor) -> DocumentUpdate<bool> {
        self.mutate(|doc| doc.update_factor(updated)).await
    }

    /// Applies a mutation and persists while still holding the write lock,
    /// so storage sees writes in mutation order.
    async fn mutate<T, F>(&self, op: F) -> DocumentUpdate<T>
    where
        F: FnOnce(&mut ContourDocument) -> T,
    {
        let mut document = self.document.write().await;
        let outcome = op(&mut *document);
        persist(self.storage.as_ref(), &*document).await;

        DocumentUpdate {
            outcome,
            document: document.clone(),
        }
    }
}

/// Writes both keys. Failures are logged, never returned.
async fn persist(storage: &dyn KeyValueStore, document: &ContourDocument) {
    match serde_json::to_string(document.contours()) {
        Ok(json) => {
            if let Err(e) = storage.set(CONTOURS_KEY, &json).await {
                warn!(error = %e, "Failed to persist contours");
            }
        }
        Err(e) => warn!(error = %e, "Failed to serialize contours"),
    }

    if let Err(e) = storage
        .set(ACTIVE_ID_KEY, document.active_contour_id().as_str())
        .await
    {
        warn!(error = %e, "Failed to persist active contour id");
    }
}
