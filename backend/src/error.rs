//! Error handling for the Sustainable Farming Advisor
//!
//! Every error reaches the HTTP boundary with a stable kind; nothing is
//! caught-and-stringified along the way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use shared::SynthesisError;

/// Application error taxonomy
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed FarmerInput, rejected before pipeline entry
    #[error("Validation error: {0}")]
    Validation(String),

    /// No viable crop candidates for the request
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Recommended crop absent from the reference tables
    #[error("Reference data inconsistency: {0}")]
    ReferenceData(String),

    /// Storage write failed; the transaction was rolled back
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::InsufficientData(msg) => AppError::InsufficientData(msg),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::InsufficientData(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INSUFFICIENT_DATA".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::ReferenceData(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "REFERENCE_DATA_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::Persistence(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "PERSISTENCE_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
