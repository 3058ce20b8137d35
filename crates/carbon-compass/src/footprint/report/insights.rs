use super::super::domain::ActivityInput;
use super::views::{Baseline, FootprintReportSummary};

pub(crate) fn generate_observations(
    summary: &FootprintReportSummary,
    input: &ActivityInput,
) -> Vec<String> {
    let mut observations = Vec::new();
    let total = summary.total_emissions;

    if let Some(kind) = summary.dominant_category {
        if let Some(entry) = summary
            .categories
            .iter()
            .find(|entry| entry.category == kind && entry.percentage > 0.0)
        {
            observations.push(format!(
                "{} is your largest source at {:.0}% of the total",
                entry.category_label, entry.percentage
            ));
        }
    }

    if let Some(national) = summary
        .comparisons
        .iter()
        .find(|comparison| comparison.baseline == Baseline::National)
    {
        observations.push(format!(
            "{:.0}% {} the {}",
            national.delta_pct,
            national.position.label(),
            national.baseline_label
        ));
    }

    if total > 0.0 && !summary.recommendations.is_empty() {
        let count = summary.recommendations.len();
        observations.push(format!(
            "Adopting the {} recommended strateg{} could save up to {:.0} kg CO₂ per year ({:.0}% of your footprint)",
            count,
            if count == 1 { "y" } else { "ies" },
            summary.total_potential_reduction,
            (100.0 * summary.total_potential_reduction / total).min(100.0)
        ));
    }

    let lifestyle = &input.lifestyle;
    let mut missing = Vec::new();
    if !lifestyle.waste_reduction {
        missing.push(("waste reduction", 10));
    }
    if !lifestyle.recycling {
        missing.push(("recycling", 5));
    }
    if !lifestyle.composting {
        missing.push(("composting", 5));
    }
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|(name, _)| *name).collect();
        let discount: u32 = missing.iter().map(|(_, pct)| pct).sum();
        observations.push(format!(
            "Taking up {} would lower lifestyle emissions by {}%",
            names.join(" and "),
            discount
        ));
    }

    observations
}
