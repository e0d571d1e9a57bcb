//! User route handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use tracing::instrument;

use crate::db::UserRepository;
use crate::error::Result;
use crate::serialize::{document_to_json, documents_to_json, insert_response, json_to_document};
use crate::state::AppState;

/// Insert a user document.
///
/// The body is stored verbatim; no schema is enforced.
#[instrument(skip(state, body))]
pub async fn add(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Json<Value>> {
    let user = json_to_document(&body)?;
    let db = state.db().get().await?;
    let result = UserRepository::new(db).insert(user).await?;
    Ok(Json(insert_response(&result)))
}

/// List all users.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let users = UserRepository::new(db).all().await?;
    Ok(Json(documents_to_json(&users)))
}

/// Find one user by email.
///
/// A missing user is not a 404: the response is a 200 with an
/// error-marker body, which is what the storefront expects.
#[instrument(skip(state))]
pub async fn by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    match UserRepository::new(db).by_email(&email).await? {
        Some(user) => Ok(Json(document_to_json(&user))),
        None => Ok(Json(json!({ "error": "User not found" }))),
    }
}
