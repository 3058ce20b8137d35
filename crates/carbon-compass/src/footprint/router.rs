use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ActivityInput, CategoryKind};
use super::estimator::EmissionCategory;
use super::level::classify;
use super::service::FootprintService;
use super::validation::InputError;

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    pub(crate) total_emissions: f64,
    pub(crate) categories: Vec<EmissionCategory>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StrategyQuery {
    #[serde(default)]
    pub(crate) category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LevelQuery {
    pub(crate) emissions: f64,
}

/// Router builder exposing estimation, reporting, and the strategy catalog.
pub fn footprint_router(service: Arc<FootprintService>) -> Router {
    Router::new()
        .route("/api/v1/footprint/estimate", post(estimate_handler))
        .route("/api/v1/footprint/report", post(report_handler))
        .route(
            "/api/v1/footprint/recommendations",
            post(recommendations_handler),
        )
        .route("/api/v1/footprint/strategies", get(strategies_handler))
        .route("/api/v1/footprint/level", get(level_handler))
        .route("/api/v1/footprint/factors", get(factors_handler))
        .with_state(service)
}

pub(crate) async fn estimate_handler(
    State(service): State<Arc<FootprintService>>,
    Json(input): Json<ActivityInput>,
) -> Response {
    match service.estimate(&input) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<FootprintService>>,
    Json(input): Json<ActivityInput>,
) -> Response {
    match service.report(&input) {
        Ok(report) => (StatusCode::OK, Json(report.summary())).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn recommendations_handler(
    State(service): State<Arc<FootprintService>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let strategies = service.recommend(request.total_emissions, &request.categories);
    (StatusCode::OK, Json(strategies)).into_response()
}

pub(crate) async fn strategies_handler(
    State(service): State<Arc<FootprintService>>,
    Query(query): Query<StrategyQuery>,
) -> Response {
    let category = match query.category.as_deref() {
        None => None,
        Some(raw) => match CategoryKind::parse(raw) {
            Some(kind) => Some(kind),
            None => {
                let payload = json!({
                    "error": format!("unknown category '{raw}'"),
                });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
    };

    (StatusCode::OK, Json(service.strategies(category))).into_response()
}

pub(crate) async fn factors_handler(State(service): State<Arc<FootprintService>>) -> Response {
    (StatusCode::OK, Json(*service.factors())).into_response()
}

pub(crate) async fn level_handler(Query(query): Query<LevelQuery>) -> Response {
    (StatusCode::OK, Json(classify(query.emissions))).into_response()
}

fn unprocessable(error: InputError) -> Response {
    tracing::warn!(%error, "rejected activity input");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
