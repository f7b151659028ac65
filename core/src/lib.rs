//! Shared core of the todo service.
//!
//! # Overview
//! - [`ItemList`]: the in-memory, ordered, unique-id registry of items that
//!   backs the server.
//! - [`ItemClient`]: a sans-IO client that builds `HttpRequest` values and
//!   parses `HttpResponse` values; the caller performs the round-trip.
//! - Wire types ([`Item`], [`CreateItem`], [`UpdateItem`], [`FieldError`])
//!   used by both the server and its clients.
//!
//! # Design
//! - Nothing in this crate performs I/O or spawns tasks.
//! - `Task` and `Todo` are the same structure; [`ItemKind`] says which
//!   collection an item lives in.

pub mod client;
pub mod error;
pub mod http;
pub mod item;
pub mod list;
pub mod types;

pub use client::ItemClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use item::{Item, ItemId, ItemKind, UnknownKind, MAX_TITLE_CHARS};
pub use list::{EmptyTitleError, ItemList};
pub use types::{CreateItem, ErrorBody, FieldError, FieldLocation, UpdateItem};
