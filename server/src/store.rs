//! Storage seam between the HTTP handlers and wherever items live.
//!
//! # Design
//! Handlers only see `ItemStore`. The in-memory backend wraps an `ItemList`
//! in a `RwLock`, taking the lock once per call so each operation is atomic
//! with respect to other requests. A database-backed store implements the
//! same trait and owns its own atomicity.

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::{EmptyTitleError, Item, ItemId, ItemList, UpdateItem};

/// Failures a store can report to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    EmptyTitle(#[from] EmptyTitleError),

    /// The backing system failed; the message is logged, never sent to clients.
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// CRUD operations over one collection of items.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    async fn create(&self, title: String) -> Result<Item, StoreError>;

    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// `Ok(None)` when no item has `id`.
    async fn update(&self, id: ItemId, input: UpdateItem) -> Result<Option<Item>, StoreError>;

    /// `Ok(false)` when no item has `id`.
    async fn delete(&self, id: ItemId) -> Result<bool, StoreError>;
}

/// Process-local store backed by an `ItemList`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    list: RwLock<ItemList>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<ItemList> for InMemoryStore {
    fn from(list: ItemList) -> Self {
        Self {
            list: RwLock::new(list),
        }
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn create(&self, title: String) -> Result<Item, StoreError> {
        Ok(self.list.write().await.add(title)?)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.list.read().await.get_all().to_vec())
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self.list.read().await.get_by_id(id).cloned())
    }

    async fn update(&self, id: ItemId, input: UpdateItem) -> Result<Option<Item>, StoreError> {
        let mut list = self.list.write().await;
        Ok(list.update_by_id(id, input.title, input.completed)?.cloned())
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        Ok(self.list.write().await.remove_by_id(id))
    }
}
