//! ThemeService - the persisted dark/light preference.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::canvas::ThemePreference;
use crate::ports::KeyValueStore;

/// Storage key of the theme flag.
pub const THEME_KEY: &str = "theme";

pub struct ThemeService {
    current: RwLock<ThemePreference>,
    storage: Arc<dyn KeyValueStore>,
}

impl ThemeService {
    /// Reads the stored preference, falling back to the ambient scheme and
    /// then to light.
    pub async fn load(storage: Arc<dyn KeyValueStore>, ambient: Option<ThemePreference>) -> Self {
        let stored = match storage.get(THEME_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference");
                None
            }
        };
        let current = ThemePreference::resolve(stored.as_deref(), ambient);
        debug!(theme = %current, "Theme resolved");

        Self {
            current: RwLock::new(current),
            storage,
        }
    }

    pub async fn current(&self) -> ThemePreference {
        *self.current.read().await
    }

    pub async fn set(&self, theme: ThemePreference) -> ThemePreference {
        let mut current = self.current.write().await;
        *current = theme;
        self.persist(theme).await;
        theme
    }

    pub async fn toggle(&self) -> ThemePreference {
        let mut current = self.current.write().await;
        *current = current.toggled();
        self.persist(*current).await;
        *current
    }

    async fn persist(&self, theme: ThemePreference) {
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()).await {
            warn!(error = %e, "Failed to persist theme preference");
        }
    }
}
