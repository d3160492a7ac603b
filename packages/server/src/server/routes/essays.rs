//! Essay coaching endpoints.
//!
//! POST /generate_sample  - model essay for a TOEFL writing prompt
//! POST /score_essay      - rubric-style scoring report for a submitted essay
//! POST /analyze_writing  - structured writing analysis (JSON findings)
//!
//! Each handler validates its input, delegates to the matching domain action,
//! and wraps the normalized result under the response key the frontend reads
//! (`sample`, `scoring`, `analysis`).

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use feedback::{FormattedEssay, ScoringReport, WritingAnalysis};

use crate::domains::essays::actions::{
    analyze_writing, generate_sample, score_essay, EssayActionError,
};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateSampleRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateSampleResponse {
    pub sample: FormattedEssay,
}

#[derive(Debug, Deserialize)]
pub struct ScoreEssayRequest {
    #[serde(default)]
    pub essay: String,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreEssayResponse {
    pub scoring: ScoringReport,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeWritingRequest {
    #[serde(default)]
    pub essay: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeWritingResponse {
    pub analysis: WritingAnalysis,
}

impl IntoResponse for EssayActionError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Validation messages are part of the API contract and safe to echo
            EssayActionError::Validation(validation) => {
                (StatusCode::BAD_REQUEST, validation.to_string())
            }
            // Provider failures are logged at the call site; clients get a
            // stable message without upstream details
            EssayActionError::Provider(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Generate a sample essay for the given writing prompt.
pub async fn generate_sample_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<GenerateSampleRequest>,
) -> Result<Json<GenerateSampleResponse>, EssayActionError> {
    let sample = generate_sample(&request.prompt, &state.server_deps).await?;
    Ok(Json(GenerateSampleResponse { sample }))
}

/// Score a submitted essay against its original prompt.
pub async fn score_essay_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ScoreEssayRequest>,
) -> Result<Json<ScoreEssayResponse>, EssayActionError> {
    let scoring = score_essay(&request.essay, &request.prompt, &state.server_deps).await?;
    Ok(Json(ScoreEssayResponse { scoring }))
}

/// Produce a structured writing analysis for the given essay.
///
/// Never fails on malformed model output: the action degrades to a
/// statistics-based fallback, so the only error paths are validation
/// and the provider call itself.
pub async fn analyze_writing_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<AnalyzeWritingRequest>,
) -> Result<Json<AnalyzeWritingResponse>, EssayActionError> {
    let analysis = analyze_writing(&request.essay, &state.server_deps).await?;
    Ok(Json(AnalyzeWritingResponse { analysis }))
}
