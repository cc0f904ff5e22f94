//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_attempt_counter_store;
mod postgres_credential_verifier;
mod postgres_package_repository;
mod postgres_state_repository;
mod redis_attempt_counter_store;
mod tracing_lockout_observer;

pub use in_memory_attempt_counter_store::InMemoryAttemptCounterStore;
pub use postgres_credential_verifier::{PostgresCredentialVerifier, hash_password};
pub use postgres_package_repository::PostgresPackageRepository;
pub use postgres_state_repository::PostgresStateRepository;
pub use redis_attempt_counter_store::RedisAttemptCounterStore;
pub use tracing_lockout_observer::TracingLockoutObserver;
