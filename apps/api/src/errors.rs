#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// How much of the offending input a `Processing` error carries for diagnosis.
const DETAIL_TRUNCATE_CHARS: usize = 80;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Processing failed in stage '{stage}': {detail}")]
    Processing {
        stage: &'static str,
        detail: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a pipeline stage failure, truncating the offending input so the
    /// error stays loggable without echoing whole transcripts.
    pub fn processing(stage: &'static str, input: &str, reason: impl std::fmt::Display) -> Self {
        let truncated: String = input.chars().take(DETAIL_TRUNCATE_CHARS).collect();
        AppError::Processing {
            stage,
            detail: format!("{reason} (input: {truncated:?})"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, "INPUT_ERROR", msg.clone()),
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Model unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_UNAVAILABLE",
                    "A required language model is not available".to_string(),
                )
            }
            AppError::Processing { stage, detail } => {
                tracing::error!("Processing error in stage '{stage}': {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROCESSING_ERROR",
                    format!("Analysis failed in stage '{stage}'"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
