use async_trait::async_trait;

use nairavest_core::AppResult;
use nairavest_domain::{PhoneNumber, UserId};

use super::key::ThrottleKey;

/// Key-value counter store with expiry, shared process-wide or across a fleet.
///
/// `hit` must be atomic at the key level so concurrent attempts against the
/// same key cannot race past the threshold check from the caller's side.
#[async_trait]
pub trait AttemptCounterStore: Send + Sync {
    /// Returns the current attempt count for the key without incrementing.
    /// Expired or absent keys read as zero.
    async fn attempts(&self, key: &str) -> AppResult<i64>;

    /// Atomically increments the counter, creating it with the given expiry
    /// window when absent. Returns the updated count.
    async fn hit(&self, key: &str, window_seconds: i64) -> AppResult<i64>;

    /// Returns the seconds remaining until the key's window expires.
    /// Expired or absent keys read as zero.
    async fn available_in(&self, key: &str) -> AppResult<i64>;

    /// Removes the counter for the key.
    async fn clear(&self, key: &str) -> AppResult<()>;
}

/// Account data returned by a successful credential check.
#[derive(Debug, Clone)]
pub struct VerifiedAccount {
    /// Unique account identifier.
    pub id: UserId,
    /// Canonical phone number the account registered with.
    pub phone: String,
    /// Display name, if the account has one.
    pub display_name: Option<String>,
}

/// Port for checking an identifier+secret pair against the credential store.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the account when the pair matches, `None` otherwise.
    ///
    /// Implementations must not distinguish unknown identifiers from wrong
    /// secrets, in latency or in error shape.
    async fn verify(&self, phone: &PhoneNumber, password: &str)
    -> AppResult<Option<VerifiedAccount>>;
}

/// Ephemeral notification emitted when a throttle key exceeds its threshold
/// while still locked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockoutEvent {
    /// The throttled bucket.
    pub key: ThrottleKey,
    /// Normalized login identifier from the originating request.
    pub identifier: String,
    /// Client network origin from the originating request.
    pub origin: String,
    /// Seconds until the lockout window expires.
    pub retry_after_seconds: i64,
}

/// Observer port for lockout notifications.
///
/// Injected explicitly instead of dispatched through a global event bus so
/// callers decide how lockouts are logged or published.
#[async_trait]
pub trait LockoutObserver: Send + Sync {
    /// Called once per rejected attempt while a key is locked out.
    async fn notify(&self, event: LockoutEvent);
}
