//! Application services and ports.

#![forbid(unsafe_code)]

mod login_throttle;
mod package_service;
mod state_service;

pub use login_throttle::{
    AttemptCounterStore, CredentialVerifier, LockoutEvent, LockoutObserver, LoginThrottleService,
    ThrottleKey, ThrottleRule, VerifiedAccount,
};
pub use package_service::{InvestmentPackageRepository, InvestmentPackageService};
pub use state_service::{StateRepository, StateService};
