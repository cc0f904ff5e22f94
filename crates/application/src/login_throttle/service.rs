use std::sync::Arc;

use nairavest_core::{AppError, AppResult};
use nairavest_domain::PhoneNumber;

use super::config::ThrottleRule;
use super::key::ThrottleKey;
use super::ports::{
    AttemptCounterStore, CredentialVerifier, LockoutEvent, LockoutObserver, VerifiedAccount,
};

/// Application service gating authentication attempts.
///
/// Composes a credential verifier with an attempt counter store: failed
/// attempts increment a per-key counter that expires after the rule's
/// window, a successful attempt clears it, and once the counter reaches the
/// threshold further attempts are rejected before verification runs.
#[derive(Clone)]
pub struct LoginThrottleService {
    counter_store: Arc<dyn AttemptCounterStore>,
    credential_verifier: Arc<dyn CredentialVerifier>,
    lockout_observer: Arc<dyn LockoutObserver>,
    rule: ThrottleRule,
}

impl LoginThrottleService {
    /// Creates a new login throttle service.
    #[must_use]
    pub fn new(
        counter_store: Arc<dyn AttemptCounterStore>,
        credential_verifier: Arc<dyn CredentialVerifier>,
        lockout_observer: Arc<dyn LockoutObserver>,
        rule: ThrottleRule,
    ) -> Self {
        Self {
            counter_store,
            credential_verifier,
            lockout_observer,
            rule,
        }
    }

    /// Fails with `AppError::RateLimited` when the key is locked out.
    ///
    /// Reads the counter without incrementing; a passing check has no side
    /// effect. On lockout the observer is notified with the request context
    /// before the error is returned.
    pub async fn ensure_not_rate_limited(&self, key: &ThrottleKey) -> AppResult<()> {
        let attempts = self.counter_store.attempts(key.as_str()).await?;

        if attempts < i64::from(self.rule.max_attempts) {
            return Ok(());
        }

        let retry_after_seconds = self.counter_store.available_in(key.as_str()).await?.max(1);

        self.lockout_observer
            .notify(LockoutEvent {
                key: key.clone(),
                identifier: key.identifier().to_owned(),
                origin: key.origin().to_owned(),
                retry_after_seconds,
            })
            .await;

        Err(AppError::RateLimited {
            message: throttle_message(retry_after_seconds),
            retry_after_seconds,
        })
    }

    /// Attempts to authenticate the identifier+secret pair under the key.
    ///
    /// The lockout check runs before verification, so a locked-out key is
    /// rejected even when the credentials are correct. A verification failure
    /// increments the key's counter (creating it with the rule's window when
    /// absent) and fails with `AppError::InvalidCredentials`; a success
    /// clears the counter and returns the verified account.
    pub async fn attempt(
        &self,
        phone: &PhoneNumber,
        password: &str,
        key: &ThrottleKey,
    ) -> AppResult<VerifiedAccount> {
        self.ensure_not_rate_limited(key).await?;

        let Some(account) = self.credential_verifier.verify(phone, password).await? else {
            self.counter_store
                .hit(key.as_str(), self.rule.window_seconds)
                .await?;

            return Err(AppError::InvalidCredentials);
        };

        self.counter_store.clear(key.as_str()).await?;

        Ok(account)
    }

    /// Returns the configured throttle rule.
    #[must_use]
    pub fn rule(&self) -> &ThrottleRule {
        &self.rule
    }
}

/// Human-readable wait message with seconds and whole minutes rounded up.
fn throttle_message(retry_after_seconds: i64) -> String {
    let minutes = (retry_after_seconds + 59) / 60;

    format!(
        "Too many login attempts. Please try again in {retry_after_seconds} seconds ({minutes} minutes)."
    )
}

#[cfg(test)]
mod tests {
    use super::throttle_message;

    #[test]
    fn minutes_are_rounded_up() {
        assert_eq!(
            throttle_message(61),
            "Too many login attempts. Please try again in 61 seconds (2 minutes)."
        );
    }

    #[test]
    fn exact_minute_is_not_rounded_further() {
        assert_eq!(
            throttle_message(60),
            "Too many login attempts. Please try again in 60 seconds (1 minutes)."
        );
    }
}
