mod catalog;
mod recommender;

pub use catalog::{ReductionStrategy, StrategyCatalog};
pub use recommender::{recommend, RecommendationLimits, StrategyRecommender};
