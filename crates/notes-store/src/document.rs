//! The document store contract.
//!
//! A document store is a key-value service holding JSON items. It offers
//! exactly four single-item-or-scan operations and makes no ordering promise
//! for `scan`. Each mutation is atomic at the store level; callers never hold
//! a lock across calls.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;

/// A stored item: one JSON document.
pub type Item = Value;

/// Key-value store of JSON items.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write `item` under `key`, replacing any existing item.
    async fn put(&self, key: &str, item: Item) -> StoreResult<()>;

    /// Fetch the item under `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<Item>>;

    /// Return every stored item in store-defined order.
    async fn scan(&self) -> StoreResult<Vec<Item>>;

    /// Remove the item under `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}
