//! Presentation defaults

use serde::Deserialize;

use crate::domain::canvas::ThemePreference;

/// UI configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Ambient color-scheme signal used when no theme is stored (`dark` or `light`)
    pub ambient_color_scheme: Option<ThemePreference>,
}
