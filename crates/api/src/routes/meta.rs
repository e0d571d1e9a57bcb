//! Liveness, welcome and cross-collection count handlers.

use axum::Json;
use axum::extract::State;
use mongodb::bson::{Document, doc};
use serde_json::{Map, Value, json};
use tracing::instrument;

use crate::db::COLLECTIONS;
use crate::error::Result;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not touch the store.
pub async fn health() -> &'static str {
    "ok"
}

/// Welcome message at the root path.
pub async fn welcome() -> Json<Value> {
    Json(json!({ "welcomeMessage": "Furniro server is running" }))
}

/// Document counts across all five collections.
#[instrument(skip(state))]
pub async fn document_count(State(state): State<AppState>) -> Result<Json<Value>> {
    let db = state.db().get().await?;

    let mut counts = Map::new();
    for name in COLLECTIONS {
        let count = db
            .collection::<Document>(name)
            .count_documents(doc! {})
            .await?;
        counts.insert(name.to_string(), Value::from(count));
    }

    Ok(Json(Value::Object(counts)))
}
