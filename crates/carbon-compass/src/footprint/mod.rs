//! Annual carbon footprint estimation and reduction strategy ranking.
//!
//! The estimator, classifier, and recommender are pure transforms over
//! immutable input and compiled-in tables. Validation, reporting, CSV import,
//! and the HTTP router sit on top of them.

pub mod domain;
pub mod estimator;
pub mod factors;
pub mod importer;
pub mod level;
pub mod report;
pub mod router;
pub mod service;
pub mod strategies;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivityInput, CategoryKind, DifficultyTier, FuelType, HomeEnergyActivity, HomeSize,
    ImpactTier, LifestyleActivity, MeatConsumption, ShoppingHabits, TransportationActivity,
};
pub use estimator::{
    estimate, CarbonResult, ComparisonBaselines, EmissionCategory, FootprintEstimator,
};
pub use factors::{DietFactors, EmissionFactorTable, ShoppingFactors};
pub use importer::{ActivityCsvImporter, ActivityImportError, ImportedHousehold};
pub use level::{classify, FootprintClassification, FootprintLevel, LevelSeverity};
pub use report::{FootprintReport, FootprintReportSummary};
pub use router::footprint_router;
pub use service::{EstimateOutcome, FootprintService};
pub use strategies::{
    recommend, RecommendationLimits, ReductionStrategy, StrategyCatalog, StrategyRecommender,
};
pub use validation::InputError;
