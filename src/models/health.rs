use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Reachable,
    Unreachable,
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: String,
    pub store: StoreStatus,
    /// Why the store ping failed. Omitted when healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
