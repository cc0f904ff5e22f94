//! Redis-backed attempt counter store for fleet-wide throttling.

use async_trait::async_trait;
use redis::{AsyncCommands, Script};

use nairavest_application::AttemptCounterStore;
use nairavest_core::{AppError, AppResult};

const HIT_SCRIPT: &str = r#"
local key = KEYS[1]
local window = tonumber(ARGV[1])

local count = redis.call('INCR', key)

if redis.call('TTL', key) < 0 then
  redis.call('EXPIRE', key, window)
end

return count
"#;

/// Redis implementation of the attempt counter store port.
///
/// The increment runs under a Lua script so the counter update and its
/// expiry assignment are atomic at the key level.
#[derive(Clone)]
pub struct RedisAttemptCounterStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisAttemptCounterStore {
    /// Creates a store with a configured Redis client and key prefix.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, key: &str) -> String {
        format!("{}:{key}", self.key_prefix)
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::Internal(format!("failed to connect to redis: {error}")))
    }
}

#[async_trait]
impl AttemptCounterStore for RedisAttemptCounterStore {
    async fn attempts(&self, key: &str) -> AppResult<i64> {
        let mut connection = self.connection().await?;

        let count: Option<i64> = connection
            .get(self.key_for(key))
            .await
            .map_err(|error| AppError::Internal(format!("failed to read attempt count: {error}")))?;

        Ok(count.unwrap_or(0))
    }

    async fn hit(&self, key: &str, window_seconds: i64) -> AppResult<i64> {
        if window_seconds <= 0 {
            return Err(AppError::Validation(
                "window_seconds must be greater than zero".to_owned(),
            ));
        }

        let mut connection = self.connection().await?;

        let count: i64 = Script::new(HIT_SCRIPT)
            .key(self.key_for(key))
            .arg(window_seconds)
            .invoke_async(&mut connection)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to record attempt in redis: {error}"))
            })?;

        Ok(count)
    }

    async fn available_in(&self, key: &str) -> AppResult<i64> {
        let mut connection = self.connection().await?;

        let ttl: i64 = connection
            .ttl(self.key_for(key))
            .await
            .map_err(|error| AppError::Internal(format!("failed to read attempt ttl: {error}")))?;

        // TTL returns -1 for keys without expiry and -2 for missing keys.
        Ok(ttl.max(0))
    }

    async fn clear(&self, key: &str) -> AppResult<()> {
        let mut connection = self.connection().await?;

        let _: () = connection
            .del(self.key_for(key))
            .await
            .map_err(|error| AppError::Internal(format!("failed to clear attempt count: {error}")))?;

        Ok(())
    }
}
