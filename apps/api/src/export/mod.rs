//! PDF export of the current document.
//!
//! An export renders the print-isolated snapshot of whatever the store
//! holds, hands it to the print pipeline, and returns the finished bytes.
//! At most one export runs at a time; a second trigger fails fast instead
//! of queueing. Exporting never touches the stored document or the screen
//! rendering.

pub mod handlers;
pub mod pipeline;

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::document::html::{render_html, RenderMode};
use crate::document::store::DocumentStore;
use crate::errors::AppError;
use crate::export::pipeline::PrintPipeline;

/// A finished export: the PDF bytes plus the identity of the document they
/// were generated from.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub document_id: Uuid,
    pub title: String,
    pub bytes: Bytes,
    pub generated_at: DateTime<Utc>,
}

/// Runs exports against the current document, one at a time.
#[derive(Clone)]
pub struct ExportService {
    printer: Arc<dyn PrintPipeline>,
    in_flight: Arc<Mutex<()>>,
}

impl ExportService {
    pub fn new(printer: Arc<dyn PrintPipeline>) -> Self {
        Self {
            printer,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// Exports the current document as PDF.
    ///
    /// Fails fast with `ExportInProgress` while another export holds the
    /// permit, and with `ExportUnavailable` when no record has been
    /// submitted yet. The permit is released when this call returns,
    /// success and failure alike.
    pub async fn export(&self, store: &DocumentStore) -> Result<ExportArtifact, AppError> {
        let _permit = self
            .in_flight
            .try_lock()
            .map_err(|_| AppError::ExportInProgress)?;

        let slot = store.current().await.ok_or(AppError::ExportUnavailable)?;
        let snapshot = render_html(&slot.document, RenderMode::Export, &slot.title);
        let bytes = self.printer.print(&snapshot).await?;
        info!("exported document {} ({} bytes)", slot.id, bytes.len());

        Ok(ExportArtifact {
            document_id: slot.id,
            title: slot.title,
            bytes,
            generated_at: Utc::now(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::pipeline::stubs::{BlockingPrinter, CapturingPrinter, FailingPrinter, StubPrinter};
    use super::*;
    use crate::models::record::ResumeRecord;

    fn make_record() -> ResumeRecord {
        serde_json::from_str(r#"{"personalInformation": {"fullName": "Jane Doe"}}"#).unwrap()
    }

    async fn make_store_with_document() -> DocumentStore {
        let store = DocumentStore::new();
        store.replace(&make_record()).await;
        store
    }

    #[tokio::test]
    async fn test_export_without_document_is_unavailable() {
        let service = ExportService::new(Arc::new(StubPrinter));
        let err = service.export(&DocumentStore::new()).await.unwrap_err();
        assert!(matches!(err, AppError::ExportUnavailable));
    }

    #[tokio::test]
    async fn test_export_returns_artifact_for_current_document() {
        let service = ExportService::new(Arc::new(StubPrinter));
        let store = make_store_with_document().await;
        let slot = store.current().await.unwrap();

        let artifact = service.export(&store).await.unwrap();
        assert_eq!(artifact.document_id, slot.id);
        assert_eq!(artifact.title, "Jane Doe");
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_prints_the_isolated_snapshot() {
        let printer = Arc::new(CapturingPrinter::default());
        let service = ExportService::new(printer.clone());
        let store = make_store_with_document().await;

        service.export(&store).await.unwrap();

        let printed = printer.printed.lock().unwrap().clone().unwrap();
        assert!(!printed.contains("Download PDF"));
        assert!(!printed.contains("@media print"));
        assert!(printed.contains("background: #fff !important"));
    }

    #[tokio::test]
    async fn test_export_leaves_screen_rendering_untouched() {
        let service = ExportService::new(Arc::new(StubPrinter));
        let store = make_store_with_document().await;
        let before_slot = store.current().await.unwrap();
        let before = render_html(&before_slot.document, RenderMode::Screen, &before_slot.title);

        service.export(&store).await.unwrap();

        let after_slot = store.current().await.unwrap();
        let after = render_html(&after_slot.document, RenderMode::Screen, &after_slot.title);
        assert_eq!(before_slot.id, after_slot.id);
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_concurrent_export_conflicts() {
        let printer = BlockingPrinter::new();
        let started = printer.started.clone();
        let release = printer.release.clone();
        let service = ExportService::new(Arc::new(printer));
        let store = make_store_with_document().await;

        let task = tokio::spawn({
            let service = service.clone();
            let store = store.clone();
            async move { service.export(&store).await }
        });
        started.notified().await;

        let err = service.export(&store).await.unwrap_err();
        assert!(matches!(err, AppError::ExportInProgress));

        release.notify_one();
        let artifact = task.await.unwrap().unwrap();
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_permit_is_released_after_a_failed_export() {
        let service = ExportService::new(Arc::new(FailingPrinter));
        let store = make_store_with_document().await;

        let first = service.export(&store).await.unwrap_err();
        assert!(matches!(first, AppError::Printer(_)));

        // A new attempt reaches the printer again instead of conflicting.
        let second = service.export(&store).await.unwrap_err();
        assert!(matches!(second, AppError::Printer(_)));
    }

    #[tokio::test]
    async fn test_failed_export_leaves_document_intact() {
        let service = ExportService::new(Arc::new(FailingPrinter));
        let store = make_store_with_document().await;
        let before = store.current().await.unwrap();

        let _ = service.export(&store).await.unwrap_err();

        let after = store.current().await.unwrap();
        assert_eq!(before.id, after.id);
        assert_eq!(
            render_html(&before.document, RenderMode::Screen, &before.title),
            render_html(&after.document, RenderMode::Screen, &after.title)
        );
    }
}
