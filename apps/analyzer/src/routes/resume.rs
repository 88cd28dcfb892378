use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::keywords::extract_keywords;
use crate::analysis::{analyze_resume, AnalysisReport};
use crate::errors::AppError;
use crate::input::{extract_pdf_text, is_pdf_name};
use crate::profile::{build_profile, generate_recommendations, Recommendations, ResumeProfile};
use crate::scoring::ScoreBreakdown;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: String,
    /// Falls back to the job description's top keywords when absent or empty.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub scores: ScoreBreakdown,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub resume_summary: ResumeProfile,
    pub analysis: AnalysisReport,
    pub recommendations: Recommendations,
}

/// POST /api/v1/resume/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze_resume(&state.pipeline, &req.text)?;
    Ok(Json(report))
}

/// POST /api/v1/resume/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription must not be empty".to_string(),
        ));
    }

    let keywords = match req.keywords {
        Some(keywords) if !keywords.is_empty() => keywords,
        _ => extract_keywords(&state.pipeline, &req.job_description),
    };

    let scores = state
        .scorer
        .score(&req.resume_text, &req.job_description, &keywords)
        .await?;

    Ok(Json(ScoreResponse { scores, keywords }))
}

/// POST /api/v1/resume/upload
/// Multipart form with a single PDF in the `resume` field.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_pdf_name(&file_name) || !(content_type.is_empty() || content_type.contains("pdf")) {
            return Err(AppError::UnsupportedMediaType(format!(
                "Only PDF files are accepted (got '{file_name}', {content_type})"
            )));
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        info!(file = %file_name, bytes = bytes.len(), "resume upload received");

        let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))??;

        let analysis = analyze_resume(&state.pipeline, &text)?;
        let resume_summary = build_profile(&text, Utc::now().year());
        let recommendations = generate_recommendations(&resume_summary);

        return Ok((
            StatusCode::OK,
            Json(UploadResponse {
                status: "success",
                message: "Resume uploaded and analyzed successfully",
                resume_summary,
                analysis,
                recommendations,
            }),
        ));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{UPLOAD_FIELD}' is required"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}
