//! Product route handlers.

use axum::Json;
use axum::extract::{Path, State};
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use tracing::instrument;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::serialize::{
    delete_response, document_to_json, documents_to_json, insert_response, json_to_document,
};
use crate::state::AppState;

/// Insert a product document.
#[instrument(skip(state, body))]
pub async fn add(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Json<Value>> {
    let product = json_to_document(&body)?;
    let db = state.db().get().await?;
    let result = ProductRepository::new(db).insert(product).await?;
    Ok(Json(insert_response(&result)))
}

/// List all products.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let products = ProductRepository::new(db).all().await?;
    Ok(Json(documents_to_json(&products)))
}

/// Find one product by id.
///
/// Malformed ids propagate as a generic server error; a well-formed id
/// with no matching document gets a 200 error-marker body.
#[instrument(skip(state))]
pub async fn by_id(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = ObjectId::parse_str(&id)?;
    let db = state.db().get().await?;
    match ProductRepository::new(db).by_id(id).await? {
        Some(product) => Ok(Json(document_to_json(&product))),
        None => Ok(Json(json!({ "error": "Product not found" }))),
    }
}

/// Delete one product by id.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = ObjectId::parse_str(&id)?;
    let db = state.db().get().await?;
    let result = ProductRepository::new(db).delete(id).await?;
    Ok(Json(delete_response(&result)))
}
