//! Stateless HTTP request builder and response parser for the item API.
//!
//! # Design
//! `ItemClient` holds only a collection URL and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::item::{Item, ItemId, ItemKind};
use crate::types::{CreateItem, ErrorBody, UpdateItem};

/// Synchronous, stateless client for one item collection.
#[derive(Debug, Clone)]
pub struct ItemClient {
    collection_url: String,
    kind: ItemKind,
}

impl ItemClient {
    /// Client for `kind` on the server at `base_url` (e.g.
    /// `http://localhost:3000`).
    pub fn new(base_url: &str, kind: ItemKind) -> Self {
        Self {
            collection_url: format!("{}{}", base_url.trim_end_matches('/'), kind.route()),
            kind,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url.clone(), None)
    }

    pub fn build_get_item(&self, id: ItemId) -> HttpRequest {
        self.request(HttpMethod::Get, self.item_url(id), None)
    }

    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Post, self.collection_url.clone(), Some(body)))
    }

    pub fn build_update_item(&self, id: ItemId, input: &UpdateItem) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Put, self.item_url(id), Some(body)))
    }

    pub fn build_delete_item(&self, id: ItemId) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url(id), None)
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 201)?;
        from_json(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{id}", self.collection_url)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), "application/json".to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            path,
            headers,
            body,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    tracing::debug!(
        status = response.status,
        expected,
        "unexpected response status"
    );
    match response.status {
        404 => Err(ApiError::NotFound),
        400 => match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(body) if !body.errors.is_empty() => Err(ApiError::Validation(body.errors)),
            _ => Err(ApiError::Http {
                status: 400,
                body: response.body.clone(),
            }),
        },
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldLocation;

    fn client() -> ItemClient {
        ItemClient::new("http://localhost:3000", ItemKind::Task)
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/tasks");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_item_produces_correct_request() {
        let req = client().build_get_item(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/tasks/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn todo_client_targets_todos_collection() {
        let client = ItemClient::new("http://localhost:3000", ItemKind::Todo);
        assert_eq!(client.build_delete_item(3).path, "http://localhost:3000/api/todos/3");
        assert_eq!(client.kind(), ItemKind::Todo);
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let input = CreateItem {
            title: "Buy milk".to_string(),
        };
        let req = client().build_create_item(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/tasks");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk"}));
    }

    #[test]
    fn build_update_item_sends_both_fields() {
        let input = UpdateItem {
            title: "Updated".to_string(),
            completed: true,
        };
        let req = client().build_update_item(1, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/tasks/1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_delete_item_produces_correct_request() {
        let req = client().build_delete_item(1);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_items_success() {
        let response = HttpResponse::new(200, r#"[{"id":1,"title":"Test","completed":false}]"#);
        let items = client().parse_list_items(response).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Test");
    }

    #[test]
    fn parse_get_item_not_found() {
        let response = HttpResponse::new(404, "Task not found");
        let err = client().parse_get_item(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_item_validation_errors() {
        let response = HttpResponse::new(
            400,
            r#"{"errors":[{"type":"field","value":"","msg":"Title cannot be empty","path":"title","location":"body"}]}"#,
        );
        let err = client().parse_create_item(response).unwrap_err();
        let ApiError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "title");
        assert_eq!(errors[0].location, FieldLocation::Body);
        assert_eq!(errors[0].msg, "Title cannot be empty");
    }

    #[test]
    fn parse_400_without_envelope_is_http_error() {
        let response = HttpResponse::new(400, "bad");
        let err = client().parse_create_item(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 400, .. }));
    }

    #[test]
    fn parse_create_item_wrong_status() {
        let response = HttpResponse::new(500, "Something went wrong");
        let err = client().parse_create_item(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_item_success() {
        let response = HttpResponse::new(200, r#"{"id":1,"title":"Updated","completed":true}"#);
        let item = client().parse_update_item(response).unwrap();
        assert_eq!(item.title, "Updated");
        assert!(item.completed);
    }

    #[test]
    fn parse_delete_item_success() {
        assert!(client().parse_delete_item(HttpResponse::new(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_item_not_found() {
        let err = client().parse_delete_item(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ItemClient::new("http://localhost:3000/", ItemKind::Task);
        assert_eq!(client.build_list_items().path, "http://localhost:3000/api/tasks");
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client().parse_list_items(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
