use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::record::DEFAULT_ARTIFACT_TITLE;
use crate::state::AppState;

/// POST /api/v1/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let artifact = state.exporter.export(&state.documents).await?;
    debug!(
        "serving export of document {} generated at {}",
        artifact.document_id, artifact.generated_at
    );
    let disposition = format!(
        "attachment; filename=\"{}.pdf\"",
        sanitize_filename(&artifact.title)
    );
    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response())
}

/// Keeps the artifact title header-safe. Anything outside a conservative
/// allowlist becomes an underscore.
fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        DEFAULT_ARTIFACT_TITLE.to_string()
    } else {
        cleaned
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
