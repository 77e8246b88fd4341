//! Route definitions for the Sustainable Farming Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create application routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Full analysis pipeline
        .route(
            "/analyze-farming-profile",
            post(handlers::analyze_farming_profile),
        )
        // Farmer profile creation (no recommendation) and lookup
        .route("/api/farmers/", post(handlers::create_farmer))
        .route("/api/farmers/:farmer_id", get(handlers::get_farmer))
        // Stored recommendations for a farmer
        .route(
            "/recommendations/:farmer_id",
            get(handlers::get_recommendations),
        )
}
