//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::result::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub response_text: String,
    pub question_text: String,
}

/// POST /api/v1/analyze
///
/// Runs the full pipeline on one (response, question) pair and returns the
/// assembled record verbatim, so callers can render or persist it as-is.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = state
        .pipeline
        .process(&request.response_text, &request.question_text)?;
    Ok(Json(result))
}
