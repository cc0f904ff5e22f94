//! Shared primitives for all Rust crates in Nairavest.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use thiserror::Error;

pub use auth::UserIdentity;

/// Result type used across Nairavest crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// User is not authenticated or not allowed to access a resource.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Login credentials did not match. The message is fixed and never
    /// reveals whether the identifier or the secret was wrong.
    #[error("Phone number or Password is incorrect")]
    InvalidCredentials,

    /// Too many attempts against a throttled key.
    #[error("{message}")]
    RateLimited {
        /// Human-readable wait message including seconds and whole minutes.
        message: String,
        /// Seconds until the lockout window expires.
        retry_after_seconds: i64,
    },

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn invalid_credentials_message_is_generic() {
        let error = AppError::InvalidCredentials;
        assert_eq!(error.to_string(), "Phone number or Password is incorrect");
    }

    #[test]
    fn rate_limited_surfaces_its_message_verbatim() {
        let error = AppError::RateLimited {
            message: "try again in 42 seconds".to_owned(),
            retry_after_seconds: 42,
        };
        assert_eq!(error.to_string(), "try again in 42 seconds");
    }
}
