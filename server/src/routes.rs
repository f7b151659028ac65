//! Handlers for `/api/{tasks,todos}` and `/api/{tasks,todos}/{id}`.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use todo_core::{FieldError, Item, ItemKind};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::ItemStore;
use crate::validation::{self, JsonObject};

/// Handler state for a single collection.
#[derive(Clone)]
struct Collection {
    kind: ItemKind,
    store: Arc<dyn ItemStore>,
}

/// Routes for every item collection, each bound to its own store.
pub fn item_routes(state: &AppState) -> Router {
    ItemKind::ALL
        .into_iter()
        .map(|kind| {
            collection_routes(Collection {
                kind,
                store: state.store(kind),
            })
        })
        .fold(Router::new(), |router, routes| router.merge(routes))
}

fn collection_routes(collection: Collection) -> Router {
    let base = collection.kind.route();
    Router::new()
        .route(&base, get(list_items).post(create_item))
        .route(
            &format!("{base}/{{id}}"),
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(collection)
}

/// Upper bound on buffered request bodies, matching axum's default limit.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Request body read as a loose JSON object.
///
/// An empty body, a missing JSON content type or a non-object body reads as
/// `{}` so that the field validators report what is missing; malformed JSON
/// is rejected.
struct JsonBody(JsonObject);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|error| FieldError::body("", error.to_string()))?;
        if bytes.is_empty() {
            return Ok(JsonBody(JsonObject::new()));
        }
        let req = Request::from_parts(parts, Body::from(bytes));
        json_object(Json::<Value>::from_request(req, state).await).map(JsonBody)
    }
}

fn json_object(body: Result<Json<Value>, JsonRejection>) -> Result<JsonObject, AppError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) | Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonObject::new()),
        Err(rejection) => Err(FieldError::body("", rejection.body_text()).into()),
    }
}

async fn list_items(State(collection): State<Collection>) -> Result<Json<Vec<Item>>, AppError> {
    let items = collection.store.list().await?;
    Ok(Json(items))
}

async fn create_item(
    State(collection): State<Collection>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let input = validation::create_request(&body)?;
    let item = collection.store.create(input.title).await?;
    tracing::info!(kind = %collection.kind, id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_item(
    State(collection): State<Collection>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, AppError> {
    let id = validation::validate_id(&raw_id)?;
    collection
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(collection.kind))
}

async fn update_item(
    State(collection): State<Collection>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Item>, AppError> {
    let (id, input) = validation::update_request(&raw_id, &body)?;
    let item = collection
        .store
        .update(id, input)
        .await?
        .ok_or(AppError::NotFound(collection.kind))?;
    tracing::info!(kind = %collection.kind, id, completed = item.completed, "item updated");
    Ok(Json(item))
}

async fn delete_item(
    State(collection): State<Collection>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = validation::validate_id(&raw_id)?;
    if collection.store.delete(id).await? {
        tracing::info!(kind = %collection.kind, id, "item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(collection.kind))
    }
}
