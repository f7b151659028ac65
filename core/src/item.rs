//! The item record shared by the list, the server and the client.
//!
//! # Design
//! Tasks and todos are the same structure served under two collections.
//! `ItemKind` names the collection so routes, not-found messages and client
//! paths all derive from one place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of an item within one list.
pub type ItemId = u64;

/// Longest title, in characters, accepted at the API boundary.
pub const MAX_TITLE_CHARS: usize = 100;

/// A single task or todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

/// Which collection an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Task,
    Todo,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Task, ItemKind::Todo];

    /// Capitalized singular, as used in "Task not found".
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Task => "Task",
            ItemKind::Todo => "Todo",
        }
    }

    /// Plural path segment under `/api`.
    pub fn collection(self) -> &'static str {
        match self {
            ItemKind::Task => "tasks",
            ItemKind::Todo => "todos",
        }
    }

    /// Absolute route of the collection, e.g. `/api/tasks`.
    pub fn route(self) -> String {
        format!("/api/{}", self.collection())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Returned when a string names neither tasks nor todos.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown item kind `{0}` (expected `tasks` or `todos`)")]
pub struct UnknownKind(pub String);

impl FromStr for ItemKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "task" | "tasks" => Ok(ItemKind::Task),
            "todo" | "todos" => Ok(ItemKind::Todo),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
