use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::analysis::pdf::extract_resume_text;
use crate::analysis::report::{analyze_resume, AnalyzeResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart upload of a PDF resume in a `file` field. Each request is
/// processed start-to-finish with its own working data; nothing is shared
/// across requests beyond the immutable catalogs in `AppState`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut pdf_bytes: Option<bytes::Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        if !looks_like_pdf(content_type.as_deref(), file_name.as_deref()) {
            return Err(AppError::Validation(
                "Only PDF resumes are accepted".to_string(),
            ));
        }
        let data = field.bytes().await?;
        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(state.config.max_upload_bytes));
        }
        pdf_bytes = Some(data);
        break;
    }

    let pdf_bytes = pdf_bytes.ok_or_else(|| {
        AppError::Validation("Multipart upload is missing a 'file' field".to_string())
    })?;

    // pdf-extract is CPU-bound; keep it off the async runtime threads
    let text = tokio::task::spawn_blocking(move || extract_resume_text(&pdf_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))??;

    info!(chars = text.chars().count(), "resume text extracted");

    let report = analyze_resume(
        &text,
        &state.skill_catalog,
        &state.job_catalog,
        state.scorer.as_ref(),
    );
    Ok(Json(report))
}

/// Accepts either a PDF content type or a `.pdf` filename — browsers are
/// inconsistent about which one they set on multipart fields.
fn looks_like_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    if matches!(content_type, Some("application/pdf" | "application/x-pdf")) {
        return true;
    }
    file_name
        .map(|name| name.to_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}
