use std::sync::Arc;

use todo_core::ItemKind;

use crate::store::{InMemoryStore, ItemStore};

/// One store per collection. Cloning is cheap: only the `Arc`s are copied.
#[derive(Clone)]
pub struct AppState {
    tasks: Arc<dyn ItemStore>,
    todos: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn ItemStore>, todos: Arc<dyn ItemStore>) -> Self {
        Self { tasks, todos }
    }

    /// Fresh, empty in-memory stores for both collections.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()), Arc::new(InMemoryStore::new()))
    }

    pub fn store(&self, kind: ItemKind) -> Arc<dyn ItemStore> {
        match kind {
            ItemKind::Task => Arc::clone(&self.tasks),
            ItemKind::Todo => Arc::clone(&self.todos),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
