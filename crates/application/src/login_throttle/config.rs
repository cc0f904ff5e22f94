/// Configuration for the login throttle.
#[derive(Debug, Clone)]
pub struct ThrottleRule {
    /// Maximum number of failed attempts allowed in the window.
    pub max_attempts: i32,
    /// Window duration in seconds.
    pub window_seconds: i64,
}

impl ThrottleRule {
    /// Creates a new throttle rule.
    #[must_use]
    pub fn new(max_attempts: i32, window_seconds: i64) -> Self {
        Self {
            max_attempts,
            window_seconds,
        }
    }
}

impl Default for ThrottleRule {
    /// Five attempts per sixty-second window.
    fn default() -> Self {
        Self::new(5, 60)
    }
}
