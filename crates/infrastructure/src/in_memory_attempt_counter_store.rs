//! In-memory attempt counter store for single-instance deployments.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use nairavest_application::AttemptCounterStore;
use nairavest_core::{AppError, AppResult};

struct CounterEntry {
    count: i64,
    expires_at: Instant,
}

/// Process-local implementation of the attempt counter store port.
///
/// Counters live behind a single mutex; the lock is never held across an
/// await point. Expired entries are dropped lazily on access.
#[derive(Default)]
pub struct InMemoryAttemptCounterStore {
    entries: Mutex<HashMap<String, CounterEntry>>,
}

impl InMemoryAttemptCounterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, CounterEntry>>> {
        self.entries
            .lock()
            .map_err(|error| AppError::Internal(format!("attempt counter lock poisoned: {error}")))
    }
}

#[async_trait]
impl AttemptCounterStore for InMemoryAttemptCounterStore {
    async fn attempts(&self, key: &str) -> AppResult<i64> {
        let mut entries = self.lock()?;

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(entry.count),
            Some(_) => {
                entries.remove(key);
                Ok(0)
            }
            None => Ok(0),
        }
    }

    async fn hit(&self, key: &str, window_seconds: i64) -> AppResult<i64> {
        if window_seconds <= 0 {
            return Err(AppError::Validation(
                "window_seconds must be greater than zero".to_owned(),
            ));
        }

        let window = Duration::from_secs(window_seconds.unsigned_abs());
        let now = Instant::now();
        let mut entries = self.lock()?;

        let entry = entries
            .entry(key.to_owned())
            .and_modify(|entry| {
                // An expired entry starts a fresh window.
                if entry.expires_at <= now {
                    entry.count = 0;
                    entry.expires_at = now + window;
                }
            })
            .or_insert(CounterEntry {
                count: 0,
                expires_at: now + window,
            });

        entry.count += 1;
        Ok(entry.count)
    }

    async fn available_in(&self, key: &str) -> AppResult<i64> {
        let entries = self.lock()?;

        let remaining = entries
            .get(key)
            .map(|entry| entry.expires_at.saturating_duration_since(Instant::now()))
            .unwrap_or_default();

        Ok(i64::try_from(remaining.as_secs()).unwrap_or(i64::MAX))
    }

    async fn clear(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn hit_increments_and_attempts_reads_back() -> AppResult<()> {
        let store = InMemoryAttemptCounterStore::new();

        assert_eq!(store.attempts("k").await?, 0);
        assert_eq!(store.hit("k", 60).await?, 1);
        assert_eq!(store.hit("k", 60).await?, 2);
        assert_eq!(store.attempts("k").await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn clear_removes_the_counter() -> AppResult<()> {
        let store = InMemoryAttemptCounterStore::new();

        store.hit("k", 60).await?;
        store.clear("k").await?;
        assert_eq!(store.attempts("k").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn counters_expire_without_a_successful_attempt() -> AppResult<()> {
        let store = InMemoryAttemptCounterStore::new();

        store.hit("k", 1).await?;
        assert_eq!(store.attempts("k").await?, 1);

        sleep(Duration::from_millis(1100));
        assert_eq!(store.attempts("k").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn hit_after_expiry_starts_a_fresh_window() -> AppResult<()> {
        let store = InMemoryAttemptCounterStore::new();

        store.hit("k", 1).await?;
        store.hit("k", 1).await?;
        sleep(Duration::from_millis(1100));

        assert_eq!(store.hit("k", 1).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn keys_are_independent() -> AppResult<()> {
        let store = InMemoryAttemptCounterStore::new();

        store.hit("a", 60).await?;
        assert_eq!(store.attempts("b").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn non_positive_window_is_rejected() {
        let store = InMemoryAttemptCounterStore::new();
        assert!(store.hit("k", 0).await.is_err());
    }
}
