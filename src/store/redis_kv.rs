//! Redis-backed [`CounterStore`].
//!
//! One `RedisStore` is built per process at cold start and shared by every
//! request. The connection itself is opened lazily and exactly once:
//! concurrent first requests wait on the same attempt instead of racing to
//! open their own. A failed attempt leaves nothing cached, so the next
//! request tries again. Once open, `ConnectionManager` replaces a dropped
//! connection on its own; the request that observes the drop still fails.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::CounterStore;
use crate::config::{StoreConfig, ENV_REDIS_URL};
use crate::error::{Result, VotesError};

// Backoff shape handed to `ConnectionManager`. With zero retries a refused
// connect fails on the first attempt, and a reconnect after a drop is a
// single attempt too.
const BACKOFF_EXPONENT_BASE: u64 = 2;
const BACKOFF_FACTOR_MS: u64 = 100;
const CONNECT_RETRIES: usize = 0;

pub struct RedisStore {
    config: StoreConfig,
    connection: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Does no I/O. Configuration problems surface on first use.
    pub fn new(config: StoreConfig) -> Self {
        RedisStore {
            config,
            connection: OnceCell::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_env())
    }

    /// True once a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    /// Open the connection ahead of the first request. Failure is logged
    /// and left for the request path to retry.
    pub async fn warm_up(&self) {
        if let Err(e) = self.connection().await {
            warn!(error = %e, "store warm-up failed, will retry on first request");
        }
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .connection
            .get_or_try_init(|| self.connect())
            .await?;
        Ok(conn.clone())
    }

    async fn connect(&self) -> Result<ConnectionManager> {
        let url = self
            .config
            .url
            .as_deref()
            .ok_or(VotesError::MissingConfig(ENV_REDIS_URL))?;
        let client = Client::open(url).map_err(VotesError::Connection)?;

        debug!(timeout_ms = self.config.connect_timeout.as_millis() as u64, "connecting to store");
        let manager = ConnectionManager::new_with_backoff(
            client,
            BACKOFF_EXPONENT_BASE,
            BACKOFF_FACTOR_MS,
            CONNECT_RETRIES,
        );
        let conn = bounded("connect", self.config.connect_timeout, manager)
            .await?
            .map_err(VotesError::Connection)?;
        info!("store connection established");
        Ok(conn)
    }

    async fn run<T, F, Fut>(&self, op: &'static str, command: F) -> Result<T>
    where
        F: FnOnce(ConnectionManager) -> Fut,
        Fut: Future<Output = redis::RedisResult<T>>,
    {
        let conn = self.connection().await?;
        let result = bounded(op, self.config.read_timeout, command(conn))
            .await?
            .map_err(VotesError::Read);
        if let Err(e) = &result {
            if e.is_connection_lost() {
                warn!(error = %e, "store connection lost, next request reconnects");
            }
        }
        result
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn mget(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        let values: Vec<Option<String>> = self
            .run("read", |mut conn| async move { conn.mget(keys).await })
            .await?;
        if values.len() != keys.len() {
            return Err(VotesError::UnexpectedReply {
                expected: keys.len(),
                got: values.len(),
            });
        }
        Ok(values)
    }

    async fn ping(&self) -> Result<()> {
        self.run("ping", |mut conn| async move {
            redis::cmd("PING").query_async::<_, String>(&mut conn).await
        })
        .await?;
        Ok(())
    }
}

async fn bounded<T>(op: &'static str, after: Duration, fut: impl Future<Output = T>) -> Result<T> {
    tokio::time::timeout(after, fut)
        .await
        .map_err(|_| VotesError::Timeout { op, after })
}
