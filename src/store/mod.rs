//! Key-value store access.
//!
//! Handlers depend on the [`CounterStore`] trait rather than on Redis
//! directly, so the request path can be exercised without a live store.

pub mod redis_kv;

use crate::error::Result;
use async_trait::async_trait;

pub use redis_kv::RedisStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Read several keys in one round-trip. The result has one entry per
    /// key, in order, with `None` for keys that do not exist.
    async fn mget(&self, keys: &[&str]) -> Result<Vec<Option<String>>>;

    /// Cheap liveness check.
    async fn ping(&self) -> Result<()>;
}
