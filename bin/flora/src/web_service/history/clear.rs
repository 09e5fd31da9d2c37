use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde_json::json;

use crate::storage::Storage;

pub async fn clear(State(storage): State<Arc<Storage>>) -> impl IntoResponse {
    storage.clear_history().await;
    info!("history cleared");

    Json(json!({ "status": "success", "message": "History cleared" }))
}
