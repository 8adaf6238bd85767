//! In-memory document state.
//!
//! The service holds at most one assembled document at a time. Submitting a
//! record replaces the slot wholesale; reads hand out clones so renders and
//! exports never observe a half-updated document.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::assemble::{assemble, RenderedDocument};
use crate::models::record::ResumeRecord;
use crate::normalize::normalize;

/// One fully-assembled document plus its identity and artifact title.
#[derive(Debug, Clone)]
pub struct DocumentSlot {
    pub id: Uuid,
    pub title: String,
    pub document: RenderedDocument,
    pub updated_at: DateTime<Utc>,
}

impl DocumentSlot {
    /// Runs the full normalize-then-assemble pass over a submitted record.
    /// The artifact title comes from the raw record so a missing name falls
    /// back to the default instead of the display placeholder.
    pub fn new(record: &ResumeRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: record.artifact_title(),
            document: assemble(&normalize(record)),
            updated_at: Utc::now(),
        }
    }
}

/// Shared handle to the document slot. Cheap to clone into handlers.
#[derive(Clone, Default)]
pub struct DocumentStore {
    slot: Arc<RwLock<Option<DocumentSlot>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles `record` and installs it as the current document,
    /// returning the stored slot.
    pub async fn replace(&self, record: &ResumeRecord) -> DocumentSlot {
        let slot = DocumentSlot::new(record);
        *self.slot.write().await = Some(slot.clone());
        slot
    }

    /// Snapshot of the current document, if any record has been submitted.
    pub async fn current(&self) -> Option<DocumentSlot> {
        self.slot.read().await.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(json: &str) -> ResumeRecord {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_store_starts_empty() {
        let store = DocumentStore::new();
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_replace_installs_assembled_document() {
        let store = DocumentStore::new();
        let stored = store
            .replace(&make_record(
                r#"{"personalInformation": {"fullName": "Jane Doe"}}"#,
            ))
            .await;

        assert_eq!(stored.title, "Jane Doe");
        let current = store.current().await.unwrap();
        assert_eq!(current.id, stored.id);
        assert_eq!(current.document.sections.len(), 4);
    }

    #[tokio::test]
    async fn test_replace_overwrites_previous_slot() {
        let store = DocumentStore::new();
        let first = store.replace(&make_record("{}")).await;
        let second = store
            .replace(&make_record(
                r#"{"personalInformation": {"fullName": "Jane Doe"}}"#,
            ))
            .await;

        assert_ne!(first.id, second.id);
        let current = store.current().await.unwrap();
        assert_eq!(current.id, second.id);
        assert_eq!(current.title, "Jane Doe");
    }

    #[tokio::test]
    async fn test_missing_name_falls_back_to_default_title() {
        let store = DocumentStore::new();
        let stored = store.replace(&make_record("{}")).await;
        assert_eq!(stored.title, "Resume");
    }
}
