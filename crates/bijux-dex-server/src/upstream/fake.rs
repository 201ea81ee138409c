// SPDX-License-Identifier: Apache-2.0

use super::{CatalogUpstream, UpstreamError, UpstreamResource};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// In-memory upstream. Unknown resources answer [`UpstreamError::NotFound`].
#[derive(Default)]
pub struct FakeUpstream {
    pub responses: Mutex<HashMap<UpstreamResource, Value>>,
    pub failures: Mutex<HashMap<UpstreamResource, UpstreamError>>,
    pub requested: Mutex<Vec<UpstreamResource>>,
    pub fetch_calls: AtomicU64,
    pub delay: Duration,
}

impl FakeUpstream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(mut self, resource: UpstreamResource, body: Value) -> Self {
        self.responses.get_mut().insert(resource, body);
        self
    }

    #[must_use]
    pub fn with_failure(mut self, resource: UpstreamResource, err: UpstreamError) -> Self {
        self.failures.get_mut().insert(resource, err);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn insert(&self, resource: UpstreamResource, body: Value) {
        self.responses.lock().await.insert(resource, body);
    }

    #[must_use]
    pub fn calls(&self) -> u64 {
        self.fetch_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogUpstream for FakeUpstream {
    fn backend_tag(&self) -> &'static str {
        "fake"
    }

    async fn fetch(&self, resource: &UpstreamResource) -> Result<Value, UpstreamError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);
        self.requested.lock().await.push(resource.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(err) = self.failures.lock().await.get(resource) {
            return Err(err.clone());
        }
        self.responses
            .lock()
            .await
            .get(resource)
            .cloned()
            .ok_or(UpstreamError::NotFound)
    }
}
