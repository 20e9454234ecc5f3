use std::time::Duration;

use crate::error::ConfigError;

/// Feedback window used when nothing else is configured.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// Longest feedback window accepted.
pub const MAX_FEEDBACK_DELAY: Duration = Duration::from_secs(60);

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    feedback_delay: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

impl QuizConfig {
    /// Creates a config with a custom feedback window.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the delay is zero or longer than `MAX_FEEDBACK_DELAY`.
    pub fn new(feedback_delay: Duration) -> Result<Self, ConfigError> {
        if feedback_delay.is_zero() {
            return Err(ConfigError::ZeroFeedbackDelay);
        }
        if feedback_delay > MAX_FEEDBACK_DELAY {
            return Err(ConfigError::FeedbackDelayTooLong(feedback_delay));
        }
        Ok(Self { feedback_delay })
    }

    /// Same as `new`, from milliseconds.
    ///
    /// # Errors
    ///
    /// See `QuizConfig::new`.
    pub fn from_millis(millis: u64) -> Result<Self, ConfigError> {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}
