//! HTTP handlers for farmer profile endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{FarmerInput, FarmerRecord};
use crate::services::PersistenceService;
use crate::AppState;

#[derive(Serialize)]
pub struct CreateFarmerResponse {
    pub farmer_id: i64,
    pub message: String,
}

/// Create a farmer profile without running the recommendation pipeline
pub async fn create_farmer(
    State(state): State<AppState>,
    Json(input): Json<FarmerInput>,
) -> AppResult<Json<CreateFarmerResponse>> {
    shared::validate_farmer_input(&input).map_err(|e| AppError::Validation(e.to_string()))?;

    let service = PersistenceService::new(state.db);
    let farmer_id = service.create_farmer(&input).await?;

    Ok(Json(CreateFarmerResponse {
        farmer_id,
        message: "Profile created successfully".to_string(),
    }))
}

/// Look up a stored farmer profile
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> AppResult<Json<FarmerRecord>> {
    let service = PersistenceService::new(state.db);
    let record = service.get_farmer(farmer_id).await?;
    Ok(Json(record))
}
