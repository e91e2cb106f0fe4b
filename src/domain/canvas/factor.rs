//! Factor - a single rated dimension of comparison ("Berührungspunkt").

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FactorId, Level};

/// Placeholder name for factors created through "add factor".
pub const DEFAULT_FACTOR_NAME: &str = "Neuer Berührungspunkt";

/// A single comparison dimension with an IST and a SOLL rating.
///
/// Owned exclusively by its parent contour. The serialized form uses the
/// camelCase field names of the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    pub id: FactorId,
    pub name: String,
    pub ist_value: Level,
    pub soll_value: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_formulation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measures: Option<String>,
}

impl Factor {
    /// Creates a factor without annotations.
    pub fn new(id: FactorId, name: impl Into<String>, ist_value: Level, soll_value: Level) -> Self {
        Self {
            id,
            name: name.into(),
            ist_value,
            soll_value,
            goal_formulation: None,
            measures: None,
        }
    }

    /// Creates the factor appended by "add factor": fresh id, placeholder
    /// name, both ratings at the industry baseline.
    pub fn placeholder() -> Self {
        Self::new(
            FactorId::new(),
            DEFAULT_FACTOR_NAME,
            Level::INDUSTRY_BASELINE,
            Level::INDUSTRY_BASELINE,
        )
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ist(mut self, level: Level) -> Self {
        self.ist_value = level;
        self
    }

    pub fn with_soll(mut self, level: Level) -> Self {
        self.soll_value = level;
        self
    }

    pub fn with_goal_formulation(mut self, goal: impl Into<String>) -> Self {
        self.goal_formulation = Some(goal.into());
        self
    }

    pub fn with_measures(mut self, measures: impl Into<String>) -> Self {
        self.measures = Some(measures.into());
        self
    }

    /// Returns the goal formulation if it is present and non-empty.
    pub fn goal(&self) -> Option<&str> {
        non_empty(self.goal_formulation.as_deref())
    }

    /// Returns the measures if they are present and non-empty.
    pub fn planned_measures(&self) -> Option<&str> {
        non_empty(self.measures.as_deref())
    }

    /// True if the factor carries any non-empty annotation.
    pub fn has_detail(&self) -> bool {
        self.goal().is_some() || self.planned_measures().is_some()
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
