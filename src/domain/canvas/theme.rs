//! Theme preference value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Dark or light color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    /// Returns the stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Returns the opposite scheme.
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Resolves the effective theme from the stored flag and the ambient
    /// color-scheme signal.
    pub fn resolve(stored: Option<&str>, ambient: Option<ThemePreference>) -> Self {
        stored
            .and_then(|s| s.parse().ok())
            .or(ambient)
            .unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(ValidationError::invalid_format(
                "theme",
                format!("expected 'dark' or 'light', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_flag_wins_over_ambient() {
        let theme = ThemePreference::resolve(Some("light"), Some(ThemePreference::Dark));
        assert_eq!(theme, ThemePreference::Light);
    }

    #[test]
    fn ambient_used_when_unset() {
        let theme = ThemePreference::resolve(None, Some(ThemePreference::Dark));
        assert_eq!(theme, ThemePreference::Dark);
    }

    #[test]
    fn unrecognised_flag_falls_back() {
        assert_eq!(
            ThemePreference::resolve(Some("sepia"), None),
            ThemePreference::Light
        );
    }

    #[test]
    fn toggle_flips_scheme() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
