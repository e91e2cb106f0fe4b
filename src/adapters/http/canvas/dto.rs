//! Data transfer objects for canvas endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{AdviceOutcome, AdviceSource, AdviceStatus};
use crate::domain::canvas::{Contour, ContourDocument, Factor, Preset};
use crate::domain::foundation::{FactorId, Level, LevelDefinition};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `PUT /contours/active`.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectContourRequest {
    pub id: String,
}

/// Body of `PATCH /contours/active`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameContourRequest {
    pub name: String,
}

/// Body of `PUT /contours/active/factors/:id`.
///
/// Levels arrive as raw integers and are clamped into range.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFactorRequest {
    pub name: String,
    pub ist_value: i64,
    pub soll_value: i64,
    #[serde(default)]
    pub goal_formulation: Option<String>,
    #[serde(default)]
    pub measures: Option<String>,
}

impl UpdateFactorRequest {
    /// Builds the replacement factor for `id`.
    pub fn into_factor(self, id: FactorId) -> Factor {
        Factor {
            id,
            name: self.name,
            ist_value: Level::clamped(self.ist_value),
            soll_value: Level::clamped(self.soll_value),
            goal_formulation: self.goal_formulation,
            measures: self.measures,
        }
    }
}

/// Body of `POST /contours/active/preset`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyPresetRequest {
    pub preset_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct FactorResponse {
    pub id: String,
    pub name: String,
    pub ist_value: u8,
    pub soll_value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_formulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measures: Option<String>,
}

impl From<&Factor> for FactorResponse {
    fn from(factor: &Factor) -> Self {
        Self {
            id: factor.id.to_string(),
            name: factor.name.clone(),
            ist_value: factor.ist_value.value(),
            soll_value: factor.soll_value.value(),
            goal_formulation: factor.goal_formulation.clone(),
            measures: factor.measures.clone(),
        }
    }
}

/// Entry in the contour switcher.
#[derive(Debug, Clone, Serialize)]
pub struct ContourSummaryResponse {
    pub id: String,
    pub name: String,
    pub factor_count: usize,
}

impl From<&Contour> for ContourSummaryResponse {
    fn from(contour: &Contour) -> Self {
        Self {
            id: contour.id.to_string(),
            name: contour.name.clone(),
            factor_count: contour.factors().len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContourResponse {
    pub id: String,
    pub name: String,
    pub factors: Vec<FactorResponse>,
}

impl From<&Contour> for ContourResponse {
    fn from(contour: &Contour) -> Self {
        Self {
            id: contour.id.to_string(),
            name: contour.name.clone(),
            factors: contour.factors().iter().map(FactorResponse::from).collect(),
        }
    }
}

/// Full canvas snapshot returned by reads and every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct CanvasResponse {
    pub contours: Vec<ContourSummaryResponse>,
    /// The stored active id, which may not match any contour.
    pub active_contour_id: String,
    /// The resolved active contour.
    pub active_contour: ContourResponse,
    /// Cached advice for the active factor set.
    pub advice: Option<String>,
}

impl CanvasResponse {
    pub fn new(document: &ContourDocument, advice: Option<String>) -> Self {
        Self {
            contours: document
                .contours()
                .iter()
                .map(ContourSummaryResponse::from)
                .collect(),
            active_contour_id: document.active_contour_id().to_string(),
            active_contour: ContourResponse::from(document.active_contour()),
            advice,
        }
    }
}

/// Response for creations: the new id plus the resulting canvas.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub canvas: CanvasResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub factors: Vec<FactorResponse>,
}

impl From<&Preset> for PresetResponse {
    fn from(preset: &Preset) -> Self {
        Self {
            id: preset.id.to_string(),
            name: preset.name.to_string(),
            description: preset.description.to_string(),
            factors: preset.factors.iter().map(FactorResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelResponse {
    pub value: u8,
    pub label: String,
    pub color: String,
    pub industry_baseline: bool,
}

impl From<&LevelDefinition> for LevelResponse {
    fn from(level: &LevelDefinition) -> Self {
        Self {
            value: level.value,
            label: level.label.to_string(),
            color: level.color.to_string(),
            industry_baseline: level.value == Level::INDUSTRY_BASELINE.value(),
        }
    }
}

/// Advice status for the active factor set.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceStatusResponse {
    pub status: AdviceStatus,
    pub advice: Option<String>,
}

/// Result of `POST /advice`.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
    pub source: AdviceSource,
    pub cache_key: String,
}

impl From<AdviceOutcome> for AdviceResponse {
    fn from(outcome: AdviceOutcome) -> Self {
        Self {
            cache_key: outcome.key.to_string(),
            advice: outcome.text,
            source: outcome.source,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
