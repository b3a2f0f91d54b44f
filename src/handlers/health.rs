//! `GET /api/health`: version plus a store round-trip.

use http::Method;
use tracing::{debug, warn};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use super::{json_response, method_not_allowed};
use crate::models::health::{HealthReport, ServiceStatus, StoreStatus};
use crate::store::CounterStore;
use crate::version;

/// 200 when the store answers a ping, 503 otherwise.
pub async fn handle<S>(req: &Request, store: &S) -> Result<Response<Body>, Error>
where
    S: CounterStore + ?Sized,
{
    if *req.method() != Method::GET {
        debug!(method = %req.method(), "rejecting non-GET request");
        return method_not_allowed();
    }

    let (status, report) = match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            HealthReport {
                status: ServiceStatus::Ok,
                version: version().to_string(),
                store: StoreStatus::Reachable,
                error: None,
            },
        ),
        Err(e) => {
            warn!(error = %e, "health check: store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthReport {
                    status: ServiceStatus::Degraded,
                    version: version().to_string(),
                    store: StoreStatus::Unreachable,
                    error: Some(e.to_string()),
                },
            )
        }
    };

    json_response(status, &report)
}
