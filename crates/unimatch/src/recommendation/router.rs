use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::ExplainedRecommendation;
use super::guard::RecommendationRequest;
use super::service::{RecommendationService, RecommendationServiceError};
use crate::catalog::CatalogProvider;
use crate::error::AppError;

/// Body accepted by the comparison endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub university_ids: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct RecommendationEnvelope {
    success: bool,
    recommendations: Vec<ExplainedRecommendation>,
    total_found: usize,
}

/// Router builder exposing the recommendation and catalog endpoints.
pub fn recommendation_router<C>(service: Arc<RecommendationService<C>>) -> Router
where
    C: CatalogProvider + 'static,
{
    Router::new()
        .route("/api/recommend", post(recommend_handler::<C>))
        .route("/api/universities", get(universities_handler::<C>))
        .route(
            "/api/universities/:university_id",
            get(university_handler::<C>),
        )
        .route("/api/compare", post(compare_handler::<C>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.recommend(request) {
        Ok(recommendations) => {
            let envelope = RecommendationEnvelope {
                success: true,
                total_found: recommendations.len(),
                recommendations,
            };
            (StatusCode::OK, axum::Json(envelope)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn universities_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.catalog() {
        Ok(catalog) => {
            let payload = json!({
                "success": true,
                "universities": catalog.universities(),
                "total": catalog.len(),
                "skipped_records": catalog.skipped().len(),
                "loaded_at": catalog.loaded_at(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn university_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Path(university_id): Path<u32>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.university(university_id) {
        Ok(university) => {
            let payload = json!({ "success": true, "university": university });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compare_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.compare(&request.university_ids) {
        Ok(comparison) => {
            let payload = json!({ "success": true, "comparison": comparison });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecommendationServiceError) -> Response {
    AppError::from(error).into_response()
}
