//! Health check for the advisor service

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
    /// Rows loaded from the farmer-history reference dataset
    pub farmer_history_rows: usize,
    /// Rows loaded from the market-history reference dataset
    pub market_history_rows: usize,
}

/// Report database connectivity and reference dataset sizes
///
/// An empty market-history count signals that every analysis request will
/// come back as insufficient data, so it is worth surfacing here.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected".to_string(),
        Err(_) => "disconnected".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        farmer_history_rows: state.farmer_history.len(),
        market_history_rows: state.market_history.len(),
    })
}
