//! Derived views - pure transformations from factors to presentation shapes.

use serde::Serialize;

use super::Factor;
use crate::domain::foundation::{axis_label, FactorId, Level, MAX_LEVEL, MIN_LEVEL};

/// Label of the fixed reference line drawn at the industry baseline.
pub const REFERENCE_LINE_LABEL: &str = "Branchenstandard";

/// One point pair on the value curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub name: String,
    pub ist: u8,
    pub soll: u8,
}

/// Labelled tick on the level axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    pub value: u8,
    pub label: String,
}

/// Fixed horizontal reference line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceLine {
    pub level: u8,
    pub label: &'static str,
}

/// Everything needed to draw IST and SOLL curves for one contour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCurveChart {
    pub rows: Vec<ChartRow>,
    pub y_axis: Vec<AxisTick>,
    pub reference_line: ReferenceLine,
}

impl ValueCurveChart {
    /// True if there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Annotated factor for the strategy-detail summary.
///
/// Only non-empty annotations are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorDetail {
    pub id: FactorId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_formulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measures: Option<String>,
}

/// Maps each factor to a chart row, preserving factor order.
pub fn chart_rows(factors: &[Factor]) -> Vec<ChartRow> {
    factors
        .iter()
        .map(|f| ChartRow {
            name: f.name.clone(),
            ist: f.ist_value.value(),
            soll: f.soll_value.value(),
        })
        .collect()
}

/// Builds the complete chart view for a factor list.
pub fn value_curve_chart(factors: &[Factor]) -> ValueCurveChart {
    ValueCurveChart {
        rows: chart_rows(factors),
        y_axis: (MIN_LEVEL..=MAX_LEVEL)
            .map(|value| AxisTick {
                value,
                label: axis_label(value as i64),
            })
            .collect(),
        reference_line: ReferenceLine {
            level: Level::INDUSTRY_BASELINE.value(),
            label: REFERENCE_LINE_LABEL,
        },
    }
}

/// Selects factors with a non-empty goal formulation or measures, in order.
pub fn detail_factors(factors: &[Factor]) -> Vec<&Factor> {
    factors.iter().filter(|f| f.has_detail()).collect()
}

/// Builds the strategy-detail summary. Empty means "no summary panel".
pub fn factor_details(factors: &[Factor]) -> Vec<FactorDetail> {
    detail_factors(factors)
        .into_iter()
        .map(|f| FactorDetail {
            id: f.id.clone(),
            name: f.name.clone(),
            goal_formulation: f.goal().map(str::to_string),
            measures: f.planned_measures().map(str::to_string),
        })
        .collect()
}
