use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};

const MISSING_VALUE: &str = "Missing pH or EC value";

/// A validated `POST /api/data` body.
#[derive(Debug, PartialEq)]
pub struct Submission {
    pub ph: f64,
    pub ec: f64,
}

#[derive(Debug)]
pub enum SubmissionError {
    Malformed(serde_json::Error),
    NotAnObject,
    MissingValue,
    NotANumber { field: &'static str, value: Value },
}

impl Submission {
    pub fn parse(body: &[u8]) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_slice(body).map_err(SubmissionError::Malformed)?;
        let object = match value {
            Value::Object(object) => object,
            _ => return Err(SubmissionError::NotAnObject),
        };

        if !object.contains_key("ph") || !object.contains_key("ec") {
            return Err(SubmissionError::MissingValue);
        }

        Ok(Self {
            ph: coerce(&object, "ph")?,
            ec: coerce(&object, "ec")?,
        })
    }
}

// Probes differ in how they encode numbers, so numeric strings and booleans
// are accepted alongside plain JSON numbers.
fn coerce(object: &Map<String, Value>, field: &'static str) -> Result<f64, SubmissionError> {
    let value = object.get(field).ok_or(SubmissionError::MissingValue)?;

    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(string) => string.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    match number {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(SubmissionError::NotANumber {
            field,
            value: value.clone(),
        }),
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "invalid JSON body: {err}"),
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::MissingValue => write!(f, "{MISSING_VALUE}"),
            Self::NotANumber { field, value } => {
                write!(f, "could not convert {field} value {value} to float")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
