use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::html::{render_html, RenderMode};
use crate::document::store::DocumentSlot;
use crate::errors::AppError;
use crate::models::record::ResumeRecord;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RenderQuery {
    pub mode: Option<String>,
}

#[derive(Serialize)]
pub struct DocumentMeta {
    pub document_id: Uuid,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct DocumentOutline {
    pub document_id: Uuid,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    pub sections: Vec<OutlineSection>,
}

#[derive(Serialize)]
pub struct OutlineSection {
    pub id: String,
    pub heading: Option<String>,
    pub atomic: bool,
}

/// PUT /api/v1/resume
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<DocumentMeta>, AppError> {
    let slot = state.documents.replace(&record).await;
    info!("document {} replaced (title: {})", slot.id, slot.title);
    Ok(Json(DocumentMeta {
        document_id: slot.id,
        title: slot.title,
        updated_at: slot.updated_at,
    }))
}

/// GET /api/v1/document
pub async fn handle_get_document(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let mode = parse_mode(query.mode.as_deref())?;
    let slot = current_slot(&state).await?;
    Ok(Html(render_html(&slot.document, mode, &slot.title)))
}

/// GET /api/v1/document/outline
pub async fn handle_get_outline(
    State(state): State<AppState>,
) -> Result<Json<DocumentOutline>, AppError> {
    let slot = current_slot(&state).await?;
    let sections = slot
        .document
        .sections
        .iter()
        .map(|section| OutlineSection {
            id: section.id.as_str().to_string(),
            heading: section.title.clone(),
            atomic: section.atomic,
        })
        .collect();
    Ok(Json(DocumentOutline {
        document_id: slot.id,
        title: slot.title,
        updated_at: slot.updated_at,
        sections,
    }))
}

fn parse_mode(mode: Option<&str>) -> Result<RenderMode, AppError> {
    match mode {
        None | Some("screen") => Ok(RenderMode::Screen),
        Some("export") => Ok(RenderMode::Export),
        Some(other) => Err(AppError::Validation(format!(
            "Unknown render mode '{other}', expected 'screen' or 'export'"
        ))),
    }
}

async fn current_slot(state: &AppState) -> Result<DocumentSlot, AppError> {
    state
        .documents
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No resume submitted yet".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_screen() {
        assert_eq!(parse_mode(None).unwrap(), RenderMode::Screen);
    }

    #[test]
    fn test_explicit_modes_parse() {
        assert_eq!(parse_mode(Some("screen")).unwrap(), RenderMode::Screen);
        assert_eq!(parse_mode(Some("export")).unwrap(), RenderMode::Export);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = parse_mode(Some("paper")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
