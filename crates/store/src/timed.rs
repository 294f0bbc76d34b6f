//! Timeout wrapper for topology stores
//!
//! The persistence call is the core's only suspension point; bounding it
//! turns a hung backend into a retryable `StoreUnavailable` instead of an
//! indefinitely blocked request.

use crate::topology_store::TopologyStore;
use async_trait::async_trait;
use shared::{RangeError, Result, TopologyDocument};
use std::time::Duration;

/// Bounds every call on the wrapped store with a caller-supplied timeout.
#[derive(Debug, Clone)]
pub struct TimedStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: TopologyStore> TimedStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        fut: impl std::future::Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(RangeError::StoreUnavailable(format!(
                "{} timed out after {:?}",
                operation, self.timeout
            ))),
        }
    }
}

#[async_trait]
impl<S: TopologyStore> TopologyStore for TimedStore<S> {
    async fn save(&self, document: &TopologyDocument) -> Result<()> {
        self.bounded("save", self.inner.save(document)).await
    }

    async fn load(&self, project_id: &str) -> Result<Option<TopologyDocument>> {
        self.bounded("load", self.inner.load(project_id)).await
    }
}
