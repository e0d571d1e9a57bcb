//! Blog route handlers.

use axum::Json;
use axum::extract::{Path, State};
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use tracing::instrument;

use crate::db::BlogRepository;
use crate::error::Result;
use crate::serialize::{
    delete_response, document_to_json, documents_to_json, insert_response, json_to_document,
};
use crate::state::AppState;

/// Insert a blog document.
#[instrument(skip(state, body))]
pub async fn add(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Json<Value>> {
    let blog = json_to_document(&body)?;
    let db = state.db().get().await?;
    let result = BlogRepository::new(db).insert(blog).await?;
    Ok(Json(insert_response(&result)))
}

/// List all blogs.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let blogs = BlogRepository::new(db).all().await?;
    Ok(Json(documents_to_json(&blogs)))
}

/// Find one blog by id.
#[instrument(skip(state))]
pub async fn by_id(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = ObjectId::parse_str(&id)?;
    let db = state.db().get().await?;
    match BlogRepository::new(db).by_id(id).await? {
        Some(blog) => Ok(Json(document_to_json(&blog))),
        None => Ok(Json(json!({ "error": "Blog not found" }))),
    }
}

/// Delete one blog by id.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = ObjectId::parse_str(&id)?;
    let db = state.db().get().await?;
    let result = BlogRepository::new(db).delete(id).await?;
    Ok(Json(delete_response(&result)))
}

/// Blog counts grouped by category.
#[instrument(skip(state))]
pub async fn category_count(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let groups = BlogRepository::new(db).count_by_category().await?;
    Ok(Json(documents_to_json(&groups)))
}
