use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use log::trace;

use crate::storage::{Reading, Storage};

pub async fn list(State(storage): State<Arc<Storage>>) -> Json<Vec<Reading>> {
    let history = storage.history().await;
    trace!("[history]: {} readings", history.len());

    Json(history)
}
