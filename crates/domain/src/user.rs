//! User domain types and validation rules.

use nairavest_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated Nigerian phone number: exactly 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a validated phone number.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be exactly
    /// 11 ASCII digits.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.len() != 11 || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(AppError::Validation(
                "Phone number must be of 11 digit only".to_owned(),
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated phone string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn eleven_digit_phone_is_accepted() {
        let phone = PhoneNumber::new("08012345678");
        assert!(phone.is_ok());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() -> nairavest_core::AppResult<()> {
        let phone = PhoneNumber::new(" 08012345678 ")?;
        assert_eq!(phone.as_str(), "08012345678");
        Ok(())
    }

    #[test]
    fn short_phone_is_rejected_with_fixed_message() {
        let error = PhoneNumber::new("0801234567");
        assert!(matches!(
            error,
            Err(nairavest_core::AppError::Validation(message))
                if message == "Phone number must be of 11 digit only"
        ));
    }

    #[test]
    fn non_digit_phone_is_rejected() {
        assert!(PhoneNumber::new("0801234567a").is_err());
    }

    proptest! {
        #[test]
        fn any_eleven_digit_string_is_accepted(digits in "[0-9]{11}") {
            prop_assert!(PhoneNumber::new(digits).is_ok());
        }

        #[test]
        fn any_other_length_is_rejected(digits in "[0-9]{0,10}|[0-9]{12,15}") {
            prop_assert!(PhoneNumber::new(digits).is_err());
        }
    }
}
