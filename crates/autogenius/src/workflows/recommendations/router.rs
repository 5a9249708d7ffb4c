use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::catalog::CatalogStore;
use super::domain::VehicleId;
use super::preferences::PreferencesRequest;
use super::service::{
    ComparisonRequest, QuestionnaireRequest, RecommendationService, RecommendationServiceError,
};

/// Router builder exposing the catalog, recommendation, and questionnaire endpoints.
pub fn recommendation_router<C>(service: Arc<RecommendationService<C>>) -> Router
where
    C: CatalogStore + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<C>))
        .route("/api/v1/catalog/:vehicle_id", get(vehicle_handler::<C>))
        .route("/api/v1/recommendations", post(recommend_handler::<C>))
        .route(
            "/api/v1/recommendations/compare",
            post(compare_handler::<C>),
        )
        .route("/api/v1/questionnaire", post(questionnaire_handler::<C>))
        .with_state(service)
}

pub(crate) async fn catalog_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
) -> Response
where
    C: CatalogStore + 'static,
{
    let vehicles = service.catalog();
    let payload = json!({
        "count": vehicles.len(),
        "vehicles": vehicles,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn vehicle_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Path(vehicle_id): Path<String>,
) -> Response
where
    C: CatalogStore + 'static,
{
    match service.vehicle(&VehicleId(vehicle_id)) {
        Ok(vehicle) => (StatusCode::OK, Json(vehicle)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Json(request): Json<PreferencesRequest>,
) -> Response
where
    C: CatalogStore + 'static,
{
    match service.recommend(request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compare_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Json(request): Json<ComparisonRequest>,
) -> Response
where
    C: CatalogStore + 'static,
{
    match service.compare(request) {
        Ok(table) => (StatusCode::OK, Json(table)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questionnaire_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Json(request): Json<QuestionnaireRequest>,
) -> Response
where
    C: CatalogStore + 'static,
{
    match service.questionnaire(request) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecommendationServiceError) -> Response {
    let status = match &error {
        RecommendationServiceError::UnknownVehicle(_) => StatusCode::NOT_FOUND,
        RecommendationServiceError::Preferences(_)
        | RecommendationServiceError::Questionnaire(_)
        | RecommendationServiceError::NotRecommended(_)
        | RecommendationServiceError::TooManySelected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    warn!(%error, status = status.as_u16(), "recommendation request rejected");

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
