//! Order route handlers.
//!
//! Orders are the one entity with more than CRUD: status-filtered
//! listings, a status update, and two group-by-status aggregations.

use axum::Json;
use axum::extract::{Path, State};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::serialize::{documents_to_json, insert_response, json_to_document, update_response};
use crate::state::AppState;

/// Request body for `PUT /updateOrder/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: String,
}

/// Insert an order document.
#[instrument(skip(state, body))]
pub async fn add(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Json<Value>> {
    let order = json_to_document(&body)?;
    let db = state.db().get().await?;
    let result = OrderRepository::new(db).insert(order).await?;
    Ok(Json(insert_response(&result)))
}

/// List all orders.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let orders = OrderRepository::new(db).all().await?;
    Ok(Json(documents_to_json(&orders)))
}

/// List orders owned by a primary email.
#[instrument(skip(state))]
pub async fn by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let orders = OrderRepository::new(db).by_email(&email).await?;
    Ok(Json(documents_to_json(&orders)))
}

/// List pending orders.
#[instrument(skip(state))]
pub async fn pending(State(state): State<AppState>) -> Result<Json<Value>> {
    by_status(&state, "pending").await
}

/// List completed orders.
#[instrument(skip(state))]
pub async fn completed(State(state): State<AppState>) -> Result<Json<Value>> {
    by_status(&state, "completed").await
}

/// List cancelled orders.
#[instrument(skip(state))]
pub async fn cancelled(State(state): State<AppState>) -> Result<Json<Value>> {
    by_status(&state, "cancelled").await
}

async fn by_status(state: &AppState, status: &str) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let orders = OrderRepository::new(db).by_status(status).await?;
    Ok(Json(documents_to_json(&orders)))
}

/// Set an order's status field.
///
/// This is the only field update the API performs on any entity.
#[instrument(skip(state, body))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<Value>> {
    let id = ObjectId::parse_str(&id)?;
    let db = state.db().get().await?;
    let result = OrderRepository::new(db).set_status(id, &body.status).await?;
    Ok(Json(update_response(&result)))
}

/// Order counts grouped by status.
#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let groups = OrderRepository::new(db).count_by_status().await?;
    Ok(Json(documents_to_json(&groups)))
}

/// `totalPrice` sums grouped by status.
#[instrument(skip(state))]
pub async fn amount_stats(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let groups = OrderRepository::new(db).amount_by_status().await?;
    Ok(Json(documents_to_json(&groups)))
}
