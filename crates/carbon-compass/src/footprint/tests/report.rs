use super::common::*;
use crate::footprint::domain::{ActivityInput, CategoryKind};
use crate::footprint::level::FootprintLevel;
use crate::footprint::report::views::{Baseline, BaselinePosition};
use crate::footprint::report::FootprintReport;

#[test]
fn commuter_report_compares_against_both_baselines() {
    let report = FootprintReport::generate(&commuter_input());

    let comparisons = report.comparisons();
    assert_eq!(comparisons.len(), 2);

    let national = &comparisons[0];
    assert_eq!(national.baseline, Baseline::National);
    assert_eq!(national.position, BaselinePosition::Below);
    assert_eq!(national.delta_pct, 11.0);
    assert_close(national.ratio_pct, 89.409375);

    let global = &comparisons[1];
    assert_eq!(global.baseline, Baseline::Global);
    assert_eq!(global.position, BaselinePosition::Above);
    assert_eq!(global.delta_pct, 198.0);
}

#[test]
fn summary_carries_level_dominant_category_and_recommendations() {
    let report = FootprintReport::generate(&commuter_input());

    let summary = report.summary();

    assert_eq!(summary.level, FootprintLevel::Average);
    assert_eq!(summary.dominant_category, Some(CategoryKind::Transportation));
    assert_eq!(summary.categories.len(), 3);
    assert_eq!(summary.recommendations.len(), 8);
    assert_close(summary.total_potential_reduction, 9_580.0);
    assert_close(report.total_potential_reduction(), 9_580.0);
}

#[test]
fn relative_reduction_is_scaled_to_the_largest_recommendation() {
    let summary = FootprintReport::generate(&commuter_input()).summary();

    let flights = summary
        .recommendations
        .iter()
        .find(|view| view.id == "reduce-flights")
        .expect("reduce-flights recommended");
    assert_close(flights.relative_reduction, 1.0);

    let bulbs = summary
        .recommendations
        .iter()
        .find(|view| view.id == "led-bulbs")
        .expect("led-bulbs recommended");
    assert_close(bulbs.relative_reduction, 180.0 / 2_800.0);

    assert!(summary
        .recommendations
        .iter()
        .all(|view| (0.0..=1.0).contains(&view.relative_reduction)));
}

#[test]
fn observations_describe_the_commuter() {
    let summary = FootprintReport::generate(&commuter_input()).summary();

    assert_eq!(
        summary.observations,
        vec![
            "Transportation is your largest source at 75% of the total".to_string(),
            "11% below the US Average".to_string(),
            "Adopting the 8 recommended strategies could save up to 9580 kg CO₂ per year (67% of your footprint)"
                .to_string(),
            "Taking up waste reduction and recycling and composting would lower lifestyle emissions by 20%"
                .to_string(),
        ]
    );
}

#[test]
fn practice_observation_is_omitted_when_all_practices_are_adopted() {
    let mut input = commuter_input();
    input.lifestyle.waste_reduction = true;
    input.lifestyle.recycling = true;
    input.lifestyle.composting = true;

    let summary = FootprintReport::generate(&input).summary();

    assert!(summary
        .observations
        .iter()
        .all(|observation| !observation.starts_with("Taking up")));
}

#[test]
fn dominant_category_prefers_display_order_on_ties() {
    let mut report = FootprintReport::generate(&ActivityInput::default());
    for category in &mut report.result.categories {
        category.emissions = 500.0;
    }

    assert_eq!(report.dominant_category(), Some(CategoryKind::Transportation));
}

#[test]
fn default_input_is_dominated_by_lifestyle() {
    let report = FootprintReport::generate(&ActivityInput::default());

    assert_eq!(report.dominant_category(), Some(CategoryKind::Lifestyle));
    assert_eq!(report.classification.level, FootprintLevel::Excellent);
    assert!(report
        .recommendations
        .iter()
        .take(3)
        .all(|strategy| strategy.category == CategoryKind::Lifestyle));
}

#[test]
fn summary_serializes_with_snake_case_tags() {
    let summary = FootprintReport::generate(&commuter_input()).summary();

    let json = serde_json::to_value(&summary).expect("serialize summary");

    assert_eq!(json["level"], "Average");
    assert_eq!(json["severity"], "near_national");
    assert_eq!(json["dominant_category"], "transportation");
    assert_eq!(json["comparisons"][0]["position"], "below");
    assert_eq!(json["categories"][1]["category"], "home_energy");
}
