use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use log::{debug, info};
use serde_json::json;

use super::submission::{Submission, SubmissionError};
use crate::storage::Storage;

pub async fn submit(
    State(storage): State<Arc<Storage>>,
    body: Bytes,
) -> Result<impl IntoResponse, SubmissionError> {
    let Submission { ph, ec } =
        Submission::parse(&body).inspect_err(|err| debug!("rejected reading: {err}"))?;

    let reading = storage.record_reading(ph, ec).await;
    info!(
        "[{}] pH: {}, EC: {}",
        reading.timestamp.to_rfc3339(),
        reading.ph,
        reading.ec
    );

    Ok(Json(json!({
        "status": "success",
        "message": "Data received",
        "data": reading,
    })))
}
