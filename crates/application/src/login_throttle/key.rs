use std::fmt::{Display, Formatter};

/// Composite bucket identity for rate limiting: identifier plus origin.
///
/// The identifier is lowercased before composing so matching is
/// case-insensitive; distributed attempts from different origins against
/// the same identifier, and vice versa, each count independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThrottleKey {
    identifier: String,
    origin: String,
    key: String,
}

impl ThrottleKey {
    /// Derives the throttle key for a login identifier and client origin.
    #[must_use]
    pub fn new(identifier: &str, origin: &str) -> Self {
        let identifier = identifier.to_lowercase();
        let key = format!("{identifier}|{origin}");

        Self {
            identifier,
            origin: origin.to_owned(),
            key,
        }
    }

    /// Returns the composed key used to bucket attempt counts.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the normalized login identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    /// Returns the client network origin.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.origin.as_str()
    }
}

impl Display for ThrottleKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::ThrottleKey;

    #[test]
    fn identifier_is_lowercased() {
        assert_eq!(
            ThrottleKey::new("ABC", "1.2.3.4"),
            ThrottleKey::new("abc", "1.2.3.4")
        );
    }

    #[test]
    fn key_joins_identifier_and_origin_with_pipe() {
        let key = ThrottleKey::new("08012345678", "10.0.0.1");
        assert_eq!(key.as_str(), "08012345678|10.0.0.1");
    }

    #[test]
    fn different_origins_bucket_separately() {
        assert_ne!(
            ThrottleKey::new("08012345678", "10.0.0.1"),
            ThrottleKey::new("08012345678", "10.0.0.2")
        );
    }
}
