//! `GET /api/votes`: the live counter snapshot.

use http::Method;
use tracing::{debug, error};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use super::{error_body, json_response, method_not_allowed};
use crate::store::CounterStore;
use crate::votes::read_snapshot;

/// Serve the current counters.
///
/// - 200 `{"yes":..,"no":..,"round":..}` on success
/// - 405 with `Allow: GET` for any other method
/// - 500 `{"error":..}` when the store cannot be read; nothing is retried
pub async fn handle<S>(req: &Request, store: &S) -> Result<Response<Body>, Error>
where
    S: CounterStore + ?Sized,
{
    if *req.method() != Method::GET {
        debug!(method = %req.method(), "rejecting non-GET request");
        return method_not_allowed();
    }

    match read_snapshot(store).await {
        Ok(counts) => json_response(StatusCode::OK, &counts),
        Err(e) => {
            error!(error = %e, "GET /api/votes error");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, &error_body(&e))
        }
    }
}
