use std::sync::Arc;

use crate::document::store::DocumentStore;
use crate::export::pipeline::PrintPipeline;
use crate::export::ExportService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentStore,
    /// Export service over a pluggable print pipeline. Default: headless Chromium.
    pub exporter: ExportService,
}

impl AppState {
    pub fn new(printer: Arc<dyn PrintPipeline>) -> Self {
        Self {
            documents: DocumentStore::new(),
            exporter: ExportService::new(printer),
        }
    }
}
