//! Request handling shared by the serverless functions.
//!
//! Every response built here carries the no-store headers, so a CDN or
//! browser never serves a stale count (or a stale error).

pub mod health;
pub mod votes;

use serde::Serialize;
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::models::ErrorBody;

/// Headers that forbid every caching layer from storing a response.
pub const NO_STORE_HEADERS: [(&str, &str); 4] = [
    ("Cache-Control", "no-store, no-cache, must-revalidate, proxy-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
    ("Surrogate-Control", "no-store"),
];

/// Message used when an error has nothing better to say.
pub const FALLBACK_ERROR: &str = "Server error";

/// Serialize `payload` as a JSON response with the no-store headers set.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, value) in NO_STORE_HEADERS {
        builder = builder.header(name, value);
    }
    Ok(builder.body(Body::Text(body))?)
}

/// 405 for anything but GET.
pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    let mut response = json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &ErrorBody::new("Method not allowed"),
    )?;
    response
        .headers_mut()
        .insert("Allow", http::HeaderValue::from_static("GET"));
    Ok(response)
}

/// Error body for a failure, falling back to a generic message.
pub fn error_body(err: &impl std::fmt::Display) -> ErrorBody {
    let message = err.to_string();
    if message.trim().is_empty() {
        ErrorBody::new(FALLBACK_ERROR)
    } else {
        ErrorBody::new(message)
    }
}
