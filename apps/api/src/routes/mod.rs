pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::document::handlers as document_handlers;
use crate::export::handlers as export_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume", put(document_handlers::handle_put_resume))
        // Document API
        .route(
            "/api/v1/document",
            get(document_handlers::handle_get_document),
        )
        .route(
            "/api/v1/document/outline",
            get(document_handlers::handle_get_outline),
        )
        // Export API
        .route("/api/v1/export", post(export_handlers::handle_export))
        .with_state(state)
}
