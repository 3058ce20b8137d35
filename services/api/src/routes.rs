use crate::infra::{snapshot_households, AppState, HouseholdSnapshot};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use carbon_compass::error::AppError;
use carbon_compass::footprint::{footprint_router, ActivityCsvImporter, FootprintService};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct BatchReportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) household_count: usize,
    pub(crate) combined_emissions: f64,
    pub(crate) households: Vec<HouseholdSnapshot>,
}

pub(crate) fn with_service_routes(service: Arc<FootprintService>) -> axum::Router {
    footprint_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/footprint/batch",
            axum::routing::post(batch_report_endpoint),
        )
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn batch_report_endpoint(
    Extension(service): Extension<Arc<FootprintService>>,
    Json(payload): Json<BatchReportRequest>,
) -> Result<Json<BatchReportResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let households = ActivityCsvImporter::from_reader(reader)?;
    let households = snapshot_households(&service, households)?;

    Ok(Json(BatchReportResponse {
        generated_at: Utc::now(),
        household_count: households.len(),
        combined_emissions: households
            .iter()
            .map(|household| household.total_emissions)
            .sum(),
        households,
    }))
}
