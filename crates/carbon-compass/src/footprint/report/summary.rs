use super::super::domain::{ActivityInput, CategoryKind};
use super::super::estimator::{CarbonResult, FootprintEstimator};
use super::super::level::{classify, FootprintClassification};
use super::super::strategies::{ReductionStrategy, StrategyRecommender};
use super::insights::generate_observations;
use super::views::{
    Baseline, BaselineComparisonView, BaselinePosition, CategoryBreakdownEntry,
    FootprintReportSummary, StrategyView,
};

/// Estimate, classification, and recommendations for one activity record.
#[derive(Debug, Clone)]
pub struct FootprintReport {
    pub input: ActivityInput,
    pub result: CarbonResult,
    pub classification: FootprintClassification,
    pub recommendations: Vec<&'static ReductionStrategy>,
}

impl FootprintReport {
    pub fn generate(input: &ActivityInput) -> Self {
        Self::with_engines(
            input,
            &FootprintEstimator::default(),
            &StrategyRecommender::default(),
        )
    }

    pub fn with_engines(
        input: &ActivityInput,
        estimator: &FootprintEstimator,
        recommender: &StrategyRecommender,
    ) -> Self {
        let result = estimator.estimate(input);
        let classification = classify(result.total_emissions);
        let recommendations = recommender.recommend(result.total_emissions, &result.categories);

        Self {
            input: *input,
            result,
            classification,
            recommendations,
        }
    }

    /// Largest contributor, first in display order on ties.
    pub fn dominant_category(&self) -> Option<CategoryKind> {
        let mut dominant: Option<(CategoryKind, f64)> = None;
        for category in &self.result.categories {
            match dominant {
                Some((_, emissions)) if category.emissions <= emissions => {}
                _ => dominant = Some((category.id, category.emissions)),
            }
        }
        dominant.map(|(kind, _)| kind)
    }

    pub fn total_potential_reduction(&self) -> f64 {
        self.recommendations
            .iter()
            .map(|strategy| strategy.potential_reduction)
            .sum()
    }

    pub fn comparisons(&self) -> Vec<BaselineComparisonView> {
        let baselines = self.result.comparison;
        [
            (Baseline::National, baselines.national_average),
            (Baseline::Global, baselines.global_average),
        ]
        .into_iter()
        .map(|(baseline, reference)| compare(self.result.total_emissions, baseline, reference))
        .collect()
    }

    pub fn summary(&self) -> FootprintReportSummary {
        let categories = self
            .result
            .categories
            .iter()
            .map(|category| CategoryBreakdownEntry {
                category: category.id,
                category_label: category.id.label(),
                icon: category.id.icon(),
                emissions: category.emissions,
                percentage: category.percentage,
            })
            .collect();

        let max_reduction = self
            .recommendations
            .iter()
            .map(|strategy| strategy.potential_reduction)
            .fold(0.0_f64, f64::max);

        let recommendations = self
            .recommendations
            .iter()
            .map(|strategy| StrategyView {
                id: strategy.id,
                category: strategy.category,
                category_label: strategy.category.label(),
                title: strategy.title,
                description: strategy.description,
                impact: strategy.impact,
                impact_label: strategy.impact.label(),
                difficulty: strategy.difficulty,
                difficulty_label: strategy.difficulty.label(),
                potential_reduction: strategy.potential_reduction,
                relative_reduction: if max_reduction > 0.0 {
                    strategy.potential_reduction / max_reduction
                } else {
                    0.0
                },
                icon: strategy.icon,
            })
            .collect();

        let mut summary = FootprintReportSummary {
            total_emissions: self.result.total_emissions,
            level: self.classification.level,
            severity: self.classification.severity,
            level_message: self.classification.message,
            categories,
            comparisons: self.comparisons(),
            dominant_category: self.dominant_category(),
            recommendations,
            total_potential_reduction: self.total_potential_reduction(),
            observations: Vec::new(),
        };
        summary.observations = generate_observations(&summary, &self.input);
        summary
    }
}

fn compare(total: f64, baseline: Baseline, reference: f64) -> BaselineComparisonView {
    let position = if total < reference {
        BaselinePosition::Below
    } else {
        BaselinePosition::Above
    };

    BaselineComparisonView {
        baseline,
        baseline_label: baseline.label(),
        reference_emissions: reference,
        ratio_pct: 100.0 * total / reference,
        delta_pct: (100.0 * (total - reference).abs() / reference).round(),
        position,
    }
}
