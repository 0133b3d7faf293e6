//! Note store adapter.
//!
//! `NoteStore` translates note operations into document store calls and
//! normalizes their results. It is a thin, fail-fast wrapper: no retries, no
//! conditional writes, no multi-item work. Any backend failure becomes
//! `NoteStoreError::Unavailable`.
//!
//! Notes are validated before they are written and never again: reads hand
//! back the stored items as they are, whatever shape they were seeded with.

use std::sync::Arc;

use notes_core::{Note, NoteId};

use crate::document::{DocumentStore, Item};
use crate::error::{NoteStoreError, NoteStoreResult};

/// Domain-typed access to the document store.
#[derive(Clone)]
pub struct NoteStore {
    documents: Arc<dyn DocumentStore>,
}

impl NoteStore {
    /// Create an adapter over the given document store.
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// Write a note keyed by its id.
    ///
    /// This is a blind upsert: an existing item with the same id is replaced.
    pub async fn create(&self, note: &Note) -> NoteStoreResult<()> {
        let item = serde_json::to_value(note)
            .map_err(|e| NoteStoreError::unavailable("create", e))?;
        self.documents
            .put(note.note_id.as_str(), item)
            .await
            .map_err(|e| NoteStoreError::unavailable("create", e))
    }

    /// Fetch the stored item for a note id. `Ok(None)` means no item has
    /// that key.
    pub async fn get(&self, note_id: &NoteId) -> NoteStoreResult<Option<Item>> {
        self.documents
            .get(note_id.as_str())
            .await
            .map_err(|e| NoteStoreError::unavailable("get", e))
    }

    /// Every stored item, in store-defined order.
    pub async fn list(&self) -> NoteStoreResult<Vec<Item>> {
        self.documents
            .scan()
            .await
            .map_err(|e| NoteStoreError::unavailable("list", e))
    }

    /// Remove a note. Succeeds whether or not the id existed.
    pub async fn delete(&self, note_id: &NoteId) -> NoteStoreResult<()> {
        self.documents
            .delete(note_id.as_str())
            .await
            .map_err(|e| NoteStoreError::unavailable("delete", e))
    }
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::memory::MemoryDocumentStore;
    use async_trait::async_trait;
    use serde_json::json;

    fn note(id: &str) -> Note {
        Note {
            note_id: NoteId::from(id),
            title: "Test Note".to_string(),
            content: "Test Content".to_string(),
            created_at: Some("2024-01-01T00:00:00.000Z".to_string()),
        }
    }

    fn memory_store() -> (Arc<MemoryDocumentStore>, NoteStore) {
        let documents = Arc::new(MemoryDocumentStore::new());
        let notes = NoteStore::new(documents.clone());
        (documents, notes)
    }

    /// A backend whose every call fails.
    struct Unreachable;

    #[async_trait]
    impl DocumentStore for Unreachable {
        async fn put(&self, _key: &str, _item: Item) -> StoreResult<()> {
            Err(StoreError::Backend("connection refused".into()))
        }
        async fn get(&self, _key: &str) -> StoreResult<Option<Item>> {
            Err(StoreError::Backend("connection refused".into()))
        }
        async fn scan(&self) -> StoreResult<Vec<Item>> {
            Err(StoreError::Timeout(5000))
        }
        async fn delete(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Backend("throttled".into()))
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (documents, notes) = memory_store();
        notes.create(&note("1")).await.unwrap();

        let stored = documents.get("1").await.unwrap().unwrap();
        assert_eq!(stored["noteId"], "1");
        assert_eq!(stored["title"], "Test Note");

        let fetched = notes.get(&NoteId::from("1")).await.unwrap().unwrap();
        assert_eq!(serde_json::from_value::<Note>(fetched).unwrap(), note("1"));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let (_, notes) = memory_store();
        assert_eq!(notes.get(&NoteId::from("999")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_overwrites_same_id() {
        let (documents, notes) = memory_store();
        notes.create(&note("1")).await.unwrap();
        let mut replacement = note("1");
        replacement.title = "Replaced".to_string();
        notes.create(&replacement).await.unwrap();

        assert_eq!(documents.len().await, 1);
        let fetched = notes.get(&NoteId::from("1")).await.unwrap().unwrap();
        assert_eq!(fetched["title"], "Replaced");
    }

    #[tokio::test]
    async fn test_list_returns_all() {
        let (_, notes) = memory_store();
        assert!(notes.list().await.unwrap().is_empty());

        for id in ["1", "2", "3"] {
            notes.create(&note(id)).await.unwrap();
        }
        let mut ids: Vec<String> = notes
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item["noteId"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_, notes) = memory_store();
        notes.create(&note("1")).await.unwrap();
        tokio_test::assert_ok!(notes.delete(&NoteId::from("1")).await);
        tokio_test::assert_ok!(notes.delete(&NoteId::from("1")).await);
        assert_eq!(notes.get(&NoteId::from("1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_seeded_item_without_created_at() {
        let (documents, notes) = memory_store();
        documents
            .put(
                "123",
                json!({ "noteId": "123", "title": "Test Note", "content": "Test Content" }),
            )
            .await
            .unwrap();
        let fetched = notes.get(&NoteId::from("123")).await.unwrap().unwrap();
        assert_eq!(fetched["noteId"], "123");
        assert!(fetched.get("createdAt").is_none());
    }

    #[tokio::test]
    async fn test_partial_items_are_read_back_verbatim() {
        let (documents, notes) = memory_store();
        let seeded = json!({ "noteId": "123", "title": "Test Note" });
        documents.put("123", seeded.clone()).await.unwrap();
        notes.create(&note("1")).await.unwrap();

        let fetched = notes.get(&NoteId::from("123")).await.unwrap();
        assert_eq!(fetched, Some(seeded.clone()));

        let listed = notes.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&seeded));
    }

    #[tokio::test]
    async fn test_backend_failures_collapse_to_unavailable() {
        let notes = NoteStore::new(Arc::new(Unreachable));

        let err = notes.create(&note("1")).await.unwrap_err();
        assert!(matches!(err, NoteStoreError::Unavailable { operation: "create", .. }));

        let err = notes.get(&NoteId::from("1")).await.unwrap_err();
        assert_eq!(err.operation(), "get");

        let err = notes.list().await.unwrap_err();
        assert!(err.to_string().contains("timed out"));

        let err = notes.delete(&NoteId::from("1")).await.unwrap_err();
        assert_eq!(err.operation(), "delete");
    }
}
