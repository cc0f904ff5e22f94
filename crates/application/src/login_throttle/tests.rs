use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nairavest_core::{AppError, AppResult};
use nairavest_domain::{PhoneNumber, UserId};

use super::{
    AttemptCounterStore, CredentialVerifier, LockoutEvent, LockoutObserver, LoginThrottleService,
    ThrottleKey, ThrottleRule, VerifiedAccount,
};

const GOOD_PASSWORD: &str = "correct-horse-battery";
const RETRY_AFTER: i64 = 33;

#[derive(Default)]
struct TestCounterStore {
    counts: Mutex<HashMap<String, i64>>,
}

impl TestCounterStore {
    fn count(&self, key: &str) -> i64 {
        self.counts
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).copied())
            .unwrap_or(0)
    }
}

#[async_trait]
impl AttemptCounterStore for TestCounterStore {
    async fn attempts(&self, key: &str) -> AppResult<i64> {
        Ok(self.count(key))
    }

    async fn hit(&self, key: &str, _window_seconds: i64) -> AppResult<i64> {
        let mut guard = self
            .counts
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock counter state: {error}")))?;
        let count = guard.entry(key.to_owned()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn available_in(&self, _key: &str) -> AppResult<i64> {
        Ok(RETRY_AFTER)
    }

    async fn clear(&self, key: &str) -> AppResult<()> {
        let mut guard = self
            .counts
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock counter state: {error}")))?;
        guard.remove(key);
        Ok(())
    }
}

#[derive(Default)]
struct TestVerifier {
    calls: Mutex<usize>,
}

impl TestVerifier {
    fn call_count(&self) -> usize {
        self.calls.lock().ok().map(|guard| *guard).unwrap_or(0)
    }
}

#[async_trait]
impl CredentialVerifier for TestVerifier {
    async fn verify(
        &self,
        phone: &PhoneNumber,
        password: &str,
    ) -> AppResult<Option<VerifiedAccount>> {
        let mut guard = self.calls.lock().map_err(|error| {
            AppError::Internal(format!("failed to lock verifier state: {error}"))
        })?;
        *guard += 1;

        if password == GOOD_PASSWORD {
            return Ok(Some(VerifiedAccount {
                id: UserId::new(),
                phone: phone.as_str().to_owned(),
                display_name: None,
            }));
        }

        Ok(None)
    }
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<LockoutEvent>>,
}

impl RecordingObserver {
    fn recorded(&self) -> Vec<LockoutEvent> {
        self.events
            .lock()
            .ok()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LockoutObserver for RecordingObserver {
    async fn notify(&self, event: LockoutEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event);
        }
    }
}

struct Fixture {
    service: LoginThrottleService,
    counter_store: Arc<TestCounterStore>,
    verifier: Arc<TestVerifier>,
    observer: Arc<RecordingObserver>,
}

fn fixture() -> Fixture {
    let counter_store = Arc::new(TestCounterStore::default());
    let verifier = Arc::new(TestVerifier::default());
    let observer = Arc::new(RecordingObserver::default());

    let service = LoginThrottleService::new(
        counter_store.clone(),
        verifier.clone(),
        observer.clone(),
        ThrottleRule::default(),
    );

    Fixture {
        service,
        counter_store,
        verifier,
        observer,
    }
}

fn phone() -> AppResult<PhoneNumber> {
    PhoneNumber::new("08012345678")
}

#[tokio::test]
async fn fresh_key_is_never_rate_limited() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    fixture.service.ensure_not_rate_limited(&key).await?;

    let result = fixture
        .service
        .attempt(&phone()?, "wrong-password", &key)
        .await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));

    Ok(())
}

#[tokio::test]
async fn sixth_attempt_is_rejected_without_invoking_the_verifier() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    for _ in 0..5 {
        let result = fixture
            .service
            .attempt(&phone()?, "wrong-password", &key)
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    assert_eq!(fixture.verifier.call_count(), 5);

    let result = fixture
        .service
        .attempt(&phone()?, "wrong-password", &key)
        .await;
    assert!(matches!(result, Err(AppError::RateLimited { .. })));
    assert_eq!(fixture.verifier.call_count(), 5);

    Ok(())
}

#[tokio::test]
async fn correct_password_is_still_rejected_while_locked_out() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    for _ in 0..5 {
        let result = fixture
            .service
            .attempt(&phone()?, "wrong-password", &key)
            .await;
        assert!(result.is_err());
    }

    let result = fixture.service.attempt(&phone()?, GOOD_PASSWORD, &key).await;
    assert!(matches!(
        result,
        Err(AppError::RateLimited {
            retry_after_seconds: RETRY_AFTER,
            ..
        })
    ));
    assert_eq!(fixture.verifier.call_count(), 5);

    Ok(())
}

#[tokio::test]
async fn success_restarts_the_counter() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    for _ in 0..2 {
        let result = fixture
            .service
            .attempt(&phone()?, "wrong-password", &key)
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    fixture.service.attempt(&phone()?, GOOD_PASSWORD, &key).await?;

    // Five more failures after the reset: the fifth must still be a
    // credential failure, not a lockout.
    for _ in 0..5 {
        let result = fixture
            .service
            .attempt(&phone()?, "wrong-password", &key)
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    let result = fixture
        .service
        .attempt(&phone()?, "wrong-password", &key)
        .await;
    assert!(matches!(result, Err(AppError::RateLimited { .. })));

    Ok(())
}

#[tokio::test]
async fn successful_first_attempt_leaves_the_counter_clear() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    let account = fixture.service.attempt(&phone()?, GOOD_PASSWORD, &key).await?;
    assert_eq!(account.phone, "08012345678");

    assert_eq!(fixture.counter_store.count(key.as_str()), 0);

    Ok(())
}

#[tokio::test]
async fn counter_stays_within_one_of_the_threshold() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    for _ in 0..10 {
        let _ = fixture
            .service
            .attempt(&phone()?, "wrong-password", &key)
            .await;
    }

    assert!(fixture.counter_store.count(key.as_str()) <= 6);

    Ok(())
}

#[tokio::test]
async fn lockout_notifies_the_observer_with_request_context() -> AppResult<()> {
    let fixture = fixture();
    let key = ThrottleKey::new("08012345678", "10.0.0.1");

    for _ in 0..5 {
        let _ = fixture
            .service
            .attempt(&phone()?, "wrong-password", &key)
            .await;
    }
    assert!(fixture.observer.recorded().is_empty());

    let _ = fixture
        .service
        .attempt(&phone()?, "wrong-password", &key)
        .await;

    let events = fixture.observer.recorded();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].identifier, "08012345678");
    assert_eq!(events[0].origin, "10.0.0.1");
    assert_eq!(events[0].retry_after_seconds, RETRY_AFTER);

    Ok(())
}

#[tokio::test]
async fn distinct_origins_are_throttled_independently() -> AppResult<()> {
    let fixture = fixture();
    let nat_key = ThrottleKey::new("08012345678", "10.0.0.1");
    let other_key = ThrottleKey::new("08012345678", "10.0.0.2");

    for _ in 0..5 {
        let _ = fixture
            .service
            .attempt(&phone()?, "wrong-password", &nat_key)
            .await;
    }

    let result = fixture
        .service
        .attempt(&phone()?, GOOD_PASSWORD, &other_key)
        .await;
    assert!(result.is_ok());

    Ok(())
}
