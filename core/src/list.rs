//! In-memory ordered registry of items.
//!
//! # Design
//! `ItemList` owns its items and hands out borrows only, so a caller holding
//! the result of `get_all` cannot observe a mutation half-way through. Ids
//! come from a per-list counter that only moves forward: removing an item
//! never frees its id for reuse. Lookups are linear scans; lists are small.

use crate::item::{Item, ItemId};

/// Returned by `add` and `update_by_id` when the title is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("title cannot be empty")]
pub struct EmptyTitleError;

/// Ordered collection of items keyed by a unique id.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
    last_id: ItemId,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, incomplete item and return a copy of it.
    pub fn add(&mut self, title: impl Into<String>) -> Result<Item, EmptyTitleError> {
        let title = title.into();
        if title.is_empty() {
            return Err(EmptyTitleError);
        }

        self.last_id += 1;
        let item = Item {
            id: self.last_id,
            title,
            completed: false,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// All items in insertion order.
    pub fn get_all(&self) -> &[Item] {
        &self.items
    }

    pub fn get_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the title and completion flag of an existing item.
    ///
    /// The title is checked before the id, so an empty title is an error even
    /// when no item matches. An unknown id yields `Ok(None)`.
    pub fn update_by_id(
        &mut self,
        id: ItemId,
        title: impl Into<String>,
        completed: bool,
    ) -> Result<Option<&Item>, EmptyTitleError> {
        let title = title.into();
        if title.is_empty() {
            return Err(EmptyTitleError);
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.title = title;
        item.completed = completed;
        Ok(Some(&*item))
    }

    /// Remove the item with `id`. Returns `false` if there was none.
    pub fn remove_by_id(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
