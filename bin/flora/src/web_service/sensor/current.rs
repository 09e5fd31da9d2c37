use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use log::trace;

use crate::storage::{Reading, Storage};

pub async fn current(State(storage): State<Arc<Storage>>) -> Json<Reading> {
    let reading = storage.current().await;
    trace!("[current]: {reading:?}");

    Json(reading)
}
