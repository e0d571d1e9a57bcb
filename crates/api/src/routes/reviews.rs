//! Review route handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;
use tracing::instrument;

use crate::db::ReviewRepository;
use crate::error::Result;
use crate::serialize::{documents_to_json, insert_response, json_to_document};
use crate::state::AppState;

/// Insert a review document.
#[instrument(skip(state, body))]
pub async fn add(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Json<Value>> {
    let review = json_to_document(&body)?;
    let db = state.db().get().await?;
    let result = ReviewRepository::new(db).insert(review).await?;
    Ok(Json(insert_response(&result)))
}

/// List reviews for a product.
///
/// `productId` is matched verbatim against the field the client posted;
/// it is a value reference, not a store id, so no ObjectId parsing here.
#[instrument(skip(state))]
pub async fn by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>> {
    let db = state.db().get().await?;
    let reviews = ReviewRepository::new(db).by_product(&product_id).await?;
    Ok(Json(documents_to_json(&reviews)))
}
