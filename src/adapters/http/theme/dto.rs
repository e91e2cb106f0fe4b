//! Data transfer objects for theme endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::canvas::ThemePreference;

/// Body of `PUT /theme`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetThemeRequest {
    pub theme: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeResponse {
    pub theme: ThemePreference,
}
