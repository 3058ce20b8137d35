use super::super::domain::{CategoryKind, DifficultyTier, ImpactTier};
use super::super::level::{FootprintLevel, LevelSeverity};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdownEntry {
    pub category: CategoryKind,
    pub category_label: &'static str,
    pub icon: &'static str,
    pub emissions: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    National,
    Global,
}

impl Baseline {
    pub const fn label(self) -> &'static str {
        match self {
            Self::National => "US Average",
            Self::Global => "Global Average",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePosition {
    Below,
    Above,
}

impl BaselinePosition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Below => "below",
            Self::Above => "above",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BaselineComparisonView {
    pub baseline: Baseline,
    pub baseline_label: &'static str,
    pub reference_emissions: f64,
    /// Total as a percentage of the baseline.
    pub ratio_pct: f64,
    /// Rounded distance from the baseline, as a percentage of the baseline.
    pub delta_pct: f64,
    pub position: BaselinePosition,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyView {
    pub id: &'static str,
    pub category: CategoryKind,
    pub category_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactTier,
    pub impact_label: &'static str,
    pub difficulty: DifficultyTier,
    pub difficulty_label: &'static str,
    pub potential_reduction: f64,
    /// Potential reduction relative to the largest in the list, 0-1.
    pub relative_reduction: f64,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FootprintReportSummary {
    pub total_emissions: f64,
    pub level: FootprintLevel,
    pub severity: LevelSeverity,
    pub level_message: &'static str,
    pub categories: Vec<CategoryBreakdownEntry>,
    pub comparisons: Vec<BaselineComparisonView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_category: Option<CategoryKind>,
    pub recommendations: Vec<StrategyView>,
    pub total_potential_reduction: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}
