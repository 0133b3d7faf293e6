//! In-process document store.
//!
//! Backs local development (`STORE_BACKEND=memory`) and tests. Items live in a
//! hash map, so `scan` order is arbitrary, matching the contract of a real
//! unordered scan.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{DocumentStore, Item};
use crate::error::StoreResult;

/// Document store held in process memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    items: RwLock<HashMap<String, Item>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn put(&self, key: &str, item: Item) -> StoreResult<()> {
        self.items.write().await.insert(key.to_string(), item);
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Item>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn scan(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}
