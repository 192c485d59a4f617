//! REST API handlers for shopping item operations
//!
//! This module implements the list, create and delete endpoints over the
//! shared item store.

use super::{models::Item, state::SharedState};
use crate::error::{ApiError, Result};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::Serialize;
use uuid::Uuid;

/// Creates routes for item-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/shopping-items", get(list_items).post(create_item))
        .route("/shopping-items/:id", delete(remove_item))
}

/// Serializes `value` into a 200 response tagged as JSON.
fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_vec(value).map_err(ApiError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Decodes the first JSON value in `body`; anything after it is ignored.
/// A top-level `null` yields a default item.
fn decode_item(body: &[u8]) -> Result<Item> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<Item>>()
        .next()
    {
        Some(item) => Ok(item.map_err(ApiError::Decode)?.unwrap_or_default()),
        None => Err(ApiError::EmptyBody),
    }
}

/// Endpoint: GET /shopping-items
/// Returns every item in insertion order.
async fn list_items(State(state): State<SharedState>) -> Result<Response> {
    let items = state.items.list().await;
    json_response(&items)
}

/// Endpoint: POST /shopping-items
/// Stores the posted item under a fresh id and echoes it back.
async fn create_item(State(state): State<SharedState>, body: Bytes) -> Result<Response> {
    let item = decode_item(&body)?;

    let created = state.items.add(item).await;
    tracing::info!(id = %created.id, name = %created.name, "created shopping item");

    json_response(&created)
}

/// Endpoint: DELETE /shopping-items/:id
/// Removes the matching item. Unknown ids still succeed.
async fn remove_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id: Uuid = id.parse()?;

    if state.items.remove(id).await {
        tracing::info!(%id, "deleted shopping item");
    }

    Ok(StatusCode::OK)
}
