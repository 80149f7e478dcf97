//! Guest endpoints
//!
//! - `GET /guests` list, `POST /guests` create
//! - `GET /guests/{id}` fetch, `PUT|PATCH /guests/{id}` update,
//!   `DELETE /guests/{id}` delete
//!
//! A non-numeric second segment is treated as the collection, and segments
//! after the id are ignored. Numeric ids that can't exist are 404. Any other
//! method on these paths is 405.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, MethodRouter},
    Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{parse_payload, GuestSegment, JsonPayload};
use crate::http::response::JsonResponse;
use crate::http::server::AppState;
use crate::models::{GuestId, GuestPayload};

/// Body of a successful write
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<GuestId>,
}

impl MessageResponse {
    fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

type ApiResult = Result<JsonResponse, ApiError>;

async fn list(state: &AppState) -> ApiResult {
    let guests = state.guests.list().await?;
    Ok(JsonResponse::ok(&guests))
}

async fn fetch(state: &AppState, id: GuestId) -> ApiResult {
    let guest = state.guests.get(id).await?;
    Ok(JsonResponse::ok(&guest))
}

async fn create(state: &AppState, payload: GuestPayload) -> ApiResult {
    let id = state.guests.create(payload).await?;
    Ok(JsonResponse::created(&MessageResponse {
        message: "Guest created",
        id: Some(id),
    }))
}

async fn update(state: &AppState, id: GuestId, payload: GuestPayload) -> ApiResult {
    state.guests.update(id, payload).await?;
    Ok(JsonResponse::ok(&MessageResponse::new("Guest updated")))
}

async fn remove(state: &AppState, id: GuestId) -> ApiResult {
    state.guests.delete(id).await?;
    Ok(JsonResponse::ok(&MessageResponse::new("Guest deleted")))
}

/// GET /guests
async fn list_guests(State(state): State<Arc<AppState>>) -> ApiResult {
    list(&state).await
}

/// POST /guests
async fn create_guest(
    State(state): State<Arc<AppState>>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult {
    create(&state, payload).await
}

/// GET /guests/{segment}
async fn get_member(State(state): State<Arc<AppState>>, segment: GuestSegment) -> ApiResult {
    match segment.member() {
        Some(id) => fetch(&state, id?).await,
        None => list(&state).await,
    }
}

/// POST /guests/{segment}
async fn post_member(
    State(state): State<Arc<AppState>>,
    segment: GuestSegment,
    body: Bytes,
) -> ApiResult {
    match segment.member() {
        Some(_) => Err(ApiError::MethodNotAllowed),
        None => create(&state, parse_payload(&body)?).await,
    }
}

/// PUT|PATCH /guests/{segment}
async fn update_member(
    State(state): State<Arc<AppState>>,
    segment: GuestSegment,
    body: Bytes,
) -> ApiResult {
    match segment.member() {
        Some(id) => update(&state, id?, parse_payload(&body)?).await,
        None => Err(ApiError::MethodNotAllowed),
    }
}

/// DELETE /guests/{segment}
async fn delete_member(State(state): State<Arc<AppState>>, segment: GuestSegment) -> ApiResult {
    match segment.member() {
        Some(id) => remove(&state, id?).await,
        None => Err(ApiError::MethodNotAllowed),
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn collection() -> MethodRouter<Arc<AppState>> {
    get(list_guests)
        .post(create_guest)
        .fallback(method_not_allowed)
}

fn member() -> MethodRouter<Arc<AppState>> {
    get(get_member)
        .post(post_member)
        .put(update_member)
        .patch(update_member)
        .delete(delete_member)
        .fallback(method_not_allowed)
}

/// Guest routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/guests", collection())
        .route("/guests/", collection())
        .route("/guests/{segment}", member())
        .route("/guests/{segment}/", member())
        .route("/guests/{segment}/{*rest}", member())
}
