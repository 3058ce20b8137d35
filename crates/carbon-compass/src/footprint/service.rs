use super::domain::{ActivityInput, CategoryKind};
use super::estimator::{CarbonResult, EmissionCategory, FootprintEstimator};
use super::factors::EmissionFactorTable;
use super::level::{classify, FootprintClassification};
use super::report::FootprintReport;
use super::strategies::{
    RecommendationLimits, ReductionStrategy, StrategyCatalog, StrategyRecommender,
};
use super::validation::InputError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EstimateOutcome {
    pub result: CarbonResult,
    pub classification: FootprintClassification,
    /// Version of the factor table the estimate was computed with.
    pub factors_version: &'static str,
}

/// Validating front door over the estimator, classifier, and recommender.
#[derive(Debug, Clone, Copy, Default)]
pub struct FootprintService {
    estimator: FootprintEstimator,
    catalog: StrategyCatalog,
    recommender: StrategyRecommender,
}

impl FootprintService {
    pub fn new(limits: RecommendationLimits) -> Self {
        let catalog = StrategyCatalog::standard();
        Self {
            estimator: FootprintEstimator::default(),
            catalog,
            recommender: StrategyRecommender::new(catalog, limits),
        }
    }

    pub fn limits(&self) -> RecommendationLimits {
        self.recommender.limits()
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        self.estimator.factors()
    }

    pub fn estimate(&self, input: &ActivityInput) -> Result<EstimateOutcome, InputError> {
        input.validate()?;
        let result = self.estimator.estimate(input);
        let classification = classify(result.total_emissions);
        Ok(EstimateOutcome {
            result,
            classification,
            factors_version: self.estimator.factors().version,
        })
    }

    pub fn report(&self, input: &ActivityInput) -> Result<FootprintReport, InputError> {
        input.validate()?;
        Ok(FootprintReport::with_engines(
            input,
            &self.estimator,
            &self.recommender,
        ))
    }

    pub fn recommend(
        &self,
        total_emissions: f64,
        categories: &[EmissionCategory],
    ) -> Vec<&'static ReductionStrategy> {
        self.recommender.recommend(total_emissions, categories)
    }

    pub fn strategies(&self, category: Option<CategoryKind>) -> Vec<&'static ReductionStrategy> {
        match category {
            Some(kind) => self.catalog.for_category(kind),
            None => self.catalog.strategies().iter().collect(),
        }
    }
}
