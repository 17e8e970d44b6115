//! Axum route handlers for the Report API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::layout::render;
use crate::models::student::StudentRecord;
use crate::state::AppState;

/// POST /api/v1/generate-pdf
///
/// Renders the posted student record and returns it inline as `application/pdf`.
/// Body errors are rejected here; the engine only ever sees a decoded record.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    payload: Result<Json<StudentRecord>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(record) = payload.map_err(reject_body)?;

    let student_id = record.id.unwrap_or_default();
    info!(
        student_id,
        name = record.name.as_deref().unwrap_or(""),
        "Generating PDF report"
    );

    let filename = record.report_filename();
    let page_config = state.page_config.clone();

    // CPU-bound layout + serialization — keep it off the async executor.
    let report = tokio::task::spawn_blocking(move || render(&record, &page_config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report render: {e}")))??;

    info!(
        student_id,
        pages = report.page_count,
        bytes = report.bytes.len(),
        "PDF report generated"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename={filename}"),
        ),
    ];
    Ok((headers, Bytes::from(report.bytes)).into_response())
}

fn reject_body(rejection: JsonRejection) -> AppError {
    let message = format!("Invalid request body: {}", rejection.body_text());
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}
