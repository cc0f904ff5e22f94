//! Login throttling ports and application service.
//!
//! Implements a fixed-window rate limiter over a per-(identifier, origin)
//! throttle key. Follows OWASP Credential Stuffing Prevention cheat sheet
//! recommendations for bounding brute-force guessing independently of the
//! credential verification logic.

mod config;
mod key;
mod ports;
mod service;

#[cfg(test)]
mod tests;

pub use config::ThrottleRule;
pub use key::ThrottleKey;
pub use ports::{
    AttemptCounterStore, CredentialVerifier, LockoutEvent, LockoutObserver, VerifiedAccount,
};
pub use service::LoginThrottleService;
