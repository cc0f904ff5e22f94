//! Lockout observer that logs through `tracing`.

use async_trait::async_trait;
use tracing::warn;

use nairavest_application::{LockoutEvent, LockoutObserver};

/// Logs lockout events as structured warnings for monitoring pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLockoutObserver;

impl TracingLockoutObserver {
    /// Creates the observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LockoutObserver for TracingLockoutObserver {
    async fn notify(&self, event: LockoutEvent) {
        warn!(
            identifier = %event.identifier,
            origin = %event.origin,
            retry_after_seconds = event.retry_after_seconds,
            "login attempts locked out"
        );
    }
}
