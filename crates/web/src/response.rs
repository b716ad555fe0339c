use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::WebResult;

/// Serializes the whole body up front so a failure can still become a 500
/// instead of a truncated 200.
pub fn json_response<T: Serialize>(value: &T) -> WebResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
