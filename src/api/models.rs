//! Catalogue endpoint handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, Json, ModelEntryResponse, PredictionApiRequest, PredictionResponse,
    RegisterModelApiRequest,
};
use crate::infrastructure::services::RegisterModelRequest;

/// GET /api/models
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModelEntryResponse>>, ApiError> {
    debug!("Listing all models");

    let models = state
        .catalogue_service
        .list_models()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(models.iter().map(ModelEntryResponse::from).collect()))
}

/// GET /api/models/:model_id/phenotypes
pub async fn list_phenotypes(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    debug!(model_id = %model_id, "Listing model phenotypes");

    let phenotypes = state
        .catalogue_service
        .list_phenotypes(&model_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(phenotypes))
}

/// POST /api/models
pub async fn register_model(
    State(state): State<AppState>,
    Json(request): Json<RegisterModelApiRequest>,
) -> Result<(StatusCode, Json<ModelEntryResponse>), ApiError> {
    debug!(model_id = %request.id, "Registering model");

    let register_request = RegisterModelRequest {
        id: request.id,
        display_name: request.display_name,
        version: request.version,
        supported_inputs: request.supported_inputs,
        predictable_phenotypes: request.predictable_phenotypes,
        description: request.description,
    };

    let entry = state
        .catalogue_service
        .register(register_request)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(ModelEntryResponse::from(&entry))))
}

/// DELETE /api/models/:model_id
pub async fn unregister_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<ModelEntryResponse>, ApiError> {
    debug!(model_id = %model_id, "Unregistering model");

    let entry = state
        .catalogue_service
        .unregister(&model_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ModelEntryResponse::from(&entry)))
}

/// POST /api/models/:model_id/phenotype_prediction
pub async fn predict_phenotype(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
    Json(request): Json<PredictionApiRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    debug!(
        model_id = %model_id,
        genotype_count = request.genotype_data.len(),
        "Requesting phenotype prediction"
    );

    let prediction_score = state
        .catalogue_service
        .predict(&model_id, &request.genotype_data)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PredictionResponse {
        model_id,
        genotype_count: request.genotype_data.len(),
        prediction_score,
    }))
}
