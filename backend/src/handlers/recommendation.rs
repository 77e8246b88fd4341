//! HTTP handlers for the recommendation pipeline

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{FarmerInput, Recommendation, RecommendationRecord};
use crate::services::PersistenceService;
use crate::AppState;
use shared::{synthesize, MarketAnalyzer, ProfileAnalyzer};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub farmer_id: i64,
    pub recommendation_id: i64,
    pub recommendation: Recommendation,
}

/// Run the full analysis pipeline for a farmer profile
///
/// profile analysis -> market analysis -> synthesis -> transactional store.
/// The analysis stages are pure; only the store awaits I/O.
pub async fn analyze_farming_profile(
    State(state): State<AppState>,
    Json(input): Json<FarmerInput>,
) -> AppResult<Json<AnalyzeResponse>> {
    shared::validate_farmer_input(&input).map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = ProfileAnalyzer::new().analyze(&input, &state.farmer_history);
    let market = MarketAnalyzer::new().analyze(
        &input.location,
        &input.preferred_crops,
        &state.market_history,
        &state.farmer_history,
    );
    let recommendation = synthesize(&profile, &market, &input)?;

    tracing::debug!(
        crop = %recommendation.crop_name,
        location = %input.location,
        scale = profile.farm_size_class.scale.label(),
        "Synthesized recommendation"
    );

    let service = PersistenceService::new(state.db);
    let receipt = service.store_profile(&input, &recommendation).await?;

    Ok(Json(AnalyzeResponse {
        farmer_id: receipt.farmer_id,
        recommendation_id: receipt.recommendation_id,
        recommendation,
    }))
}

/// Stored recommendations for a farmer
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> AppResult<Json<Vec<RecommendationRecord>>> {
    let service = PersistenceService::new(state.db);
    let records = service.recommendations_for(farmer_id).await?;
    Ok(Json(records))
}
