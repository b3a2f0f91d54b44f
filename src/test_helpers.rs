//! In-memory stand-ins used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, VotesError};
use crate::store::CounterStore;

/// A `CounterStore` backed by a `HashMap`, counting every call.
#[derive(Default)]
pub struct FakeStore {
    values: Mutex<HashMap<String, String>>,
    fail_with_timeout: bool,
    delay: Option<Duration>,
    mget_calls: AtomicUsize,
    ping_calls: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (k, v) in pairs {
            store.set(k, v);
        }
        store
    }

    /// Every call fails as if the store stopped answering.
    pub fn unreachable() -> Self {
        FakeStore {
            fail_with_timeout: true,
            ..Self::default()
        }
    }

    /// Hold every call for `delay` before answering.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn mget_calls(&self) -> usize {
        self.mget_calls.load(Ordering::SeqCst)
    }

    pub fn ping_calls(&self) -> usize {
        self.ping_calls.load(Ordering::SeqCst)
    }

    async fn answer(&self, op: &'static str) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_with_timeout {
            return Err(VotesError::Timeout {
                op,
                after: Duration::from_millis(2000),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CounterStore for FakeStore {
    async fn mget(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        self.mget_calls.fetch_add(1, Ordering::SeqCst);
        self.answer("read").await?;
        let values = self.values.lock().unwrap();
        Ok(keys.iter().map(|k| values.get(*k).cloned()).collect())
    }

    async fn ping(&self) -> Result<()> {
        self.ping_calls.fetch_add(1, Ordering::SeqCst);
        self.answer("ping").await
    }
}

/// A bodiless request to the endpoint under test.
pub fn request(method: &str) -> vercel_runtime::Request {
    http::Request::builder()
        .method(method)
        .uri("https://example.vercel.app/api/votes")
        .body(vercel_runtime::Body::Empty)
        .unwrap()
}

/// Parse a text response body as JSON.
pub fn body_json(response: &vercel_runtime::Response<vercel_runtime::Body>) -> serde_json::Value {
    match response.body() {
        vercel_runtime::Body::Text(text) => serde_json::from_str(text).unwrap(),
        other => panic!("expected a text body, got {other:?}"),
    }
}

pub fn assert_no_store(response: &vercel_runtime::Response<vercel_runtime::Body>) {
    for (name, value) in crate::handlers::NO_STORE_HEADERS {
        assert_eq!(
            response.headers().get(name).map(|v| v.to_str().unwrap()),
            Some(value),
            "header {name}"
        );
    }
}
