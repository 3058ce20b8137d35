use super::super::estimator::EmissionCategory;
use super::catalog::{ReductionStrategy, StrategyCatalog};
use serde::{Deserialize, Serialize};

/// Caps applied while assembling a recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    pub per_category: usize,
    pub total: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            per_category: 3,
            total: 8,
        }
    }
}

/// Stateless ranker over a fixed strategy catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyRecommender {
    catalog: StrategyCatalog,
    limits: RecommendationLimits,
}

impl StrategyRecommender {
    pub fn new(catalog: StrategyCatalog, limits: RecommendationLimits) -> Self {
        Self { catalog, limits }
    }

    pub fn limits(&self) -> RecommendationLimits {
        self.limits
    }

    /// `total_emissions` is accepted for interface compatibility and does not
    /// influence the ranking.
    pub fn recommend(
        &self,
        _total_emissions: f64,
        categories: &[EmissionCategory],
    ) -> Vec<&'static ReductionStrategy> {
        let mut ordered: Vec<&EmissionCategory> = categories.iter().collect();
        // Stable sort keeps input order on ties. Adding 0.0 folds -0.0 into 0.0
        // so signed zeros tie.
        ordered.sort_by(|a, b| (b.emissions + 0.0).total_cmp(&(a.emissions + 0.0)));

        let mut recommendations = Vec::new();
        for category in ordered {
            let mut candidates = self.catalog.for_category(category.id);
            candidates.sort_by(|a, b| b.score().cmp(&a.score()));
            recommendations.extend(candidates.into_iter().take(self.limits.per_category));
        }

        recommendations.truncate(self.limits.total);
        recommendations
    }
}

/// Rank the standard catalog with the default limits.
pub fn recommend(
    total_emissions: f64,
    categories: &[EmissionCategory],
) -> Vec<&'static ReductionStrategy> {
    StrategyRecommender::default().recommend(total_emissions, categories)
}
