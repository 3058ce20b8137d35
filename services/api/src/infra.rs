use carbon_compass::error::AppError;
use carbon_compass::footprint::{
    ActivityInput, CategoryKind, FootprintLevel, FootprintReport, FootprintService,
    ImportedHousehold,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One line of a batch report.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct HouseholdSnapshot {
    pub(crate) household: String,
    pub(crate) total_emissions: f64,
    pub(crate) level: FootprintLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) dominant_category: Option<CategoryKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) top_strategy: Option<&'static str>,
    pub(crate) total_potential_reduction: f64,
}

impl HouseholdSnapshot {
    pub(crate) fn from_report(household: String, report: &FootprintReport) -> Self {
        Self {
            household,
            total_emissions: report.result.total_emissions,
            level: report.classification.level,
            dominant_category: report.dominant_category(),
            top_strategy: report.recommendations.first().map(|strategy| strategy.id),
            total_potential_reduction: report.total_potential_reduction(),
        }
    }
}

pub(crate) fn snapshot_households(
    service: &FootprintService,
    households: Vec<ImportedHousehold>,
) -> Result<Vec<HouseholdSnapshot>, AppError> {
    households
        .into_iter()
        .map(|household| -> Result<HouseholdSnapshot, AppError> {
            let report = service.report(&household.input)?;
            Ok(HouseholdSnapshot::from_report(household.label, &report))
        })
        .collect()
}

pub(crate) fn parse_category(raw: &str) -> Result<CategoryKind, String> {
    CategoryKind::parse(raw).ok_or_else(|| {
        format!("unknown category '{raw}' (expected transportation, home-energy or lifestyle)")
    })
}

pub(crate) fn read_activity_input(path: &Path) -> Result<ActivityInput, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let input = serde_json::from_str(&raw)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category_reports_unknown_values() {
        assert_eq!(parse_category("Lifestyle"), Ok(CategoryKind::Lifestyle));
        let message = parse_category("aviation").expect_err("unknown");
        assert!(message.contains("'aviation'"));
    }

    #[test]
    fn snapshots_summarize_each_household() {
        let households = vec![ImportedHousehold {
            label: "Oak Street".to_string(),
            input: ActivityInput::default(),
        }];

        let snapshots =
            snapshot_households(&FootprintService::default(), households).expect("snapshots");

        assert_eq!(snapshots.len(), 1);
        let snapshot = &snapshots[0];
        assert_eq!(snapshot.household, "Oak Street");
        assert_eq!(snapshot.total_emissions, 2_400.0);
        assert_eq!(snapshot.level, FootprintLevel::Excellent);
        assert_eq!(snapshot.dominant_category, Some(CategoryKind::Lifestyle));
        assert_eq!(snapshot.top_strategy, Some("plant-based-diet"));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let error = read_activity_input(Path::new("./no-such-activity.json")).expect_err("io");
        assert!(matches!(error, AppError::Io(_)));
    }
}
