//! Store configuration, read from the process environment.
//!
//! Only the store address is required, and even that is checked lazily:
//! a missing `REDIS_URL` turns into a 500 on the first request rather than
//! a cold-start crash.

use std::time::Duration;
use tracing::warn;

/// Environment variable holding the store connection string.
pub const ENV_REDIS_URL: &str = "REDIS_URL";
/// Connect timeout override, in milliseconds.
pub const ENV_CONNECT_TIMEOUT_MS: &str = "DN_CONNECT_TIMEOUT_MS";
/// Per-command timeout override, in milliseconds.
pub const ENV_READ_TIMEOUT_MS: &str = "DN_READ_TIMEOUT_MS";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5_000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(2_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store address (e.g. `redis://default:pw@host:6379`). `None` when unset.
    pub url: Option<String>,
    /// Upper bound on establishing the connection.
    pub connect_timeout: Duration,
    /// Upper bound on a single command round-trip.
    pub read_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_REDIS_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        StoreConfig {
            url,
            connect_timeout: timeout_from(&lookup, ENV_CONNECT_TIMEOUT_MS, DEFAULT_CONNECT_TIMEOUT),
            read_timeout: timeout_from(&lookup, ENV_READ_TIMEOUT_MS, DEFAULT_READ_TIMEOUT),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

fn timeout_from<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Duration::from_millis(ms),
        _ => {
            warn!(key, value = %raw, default_ms = default.as_millis() as u64, "invalid timeout, using default");
            default
        }
    }
}
