//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

pub use quiz_core::model::SessionError;

/// Errors emitted while building a `QuizConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("feedback delay must be > 0")]
    ZeroFeedbackDelay,
    #[error("feedback delay of {0:?} exceeds the 60s maximum")]
    FeedbackDelayTooLong(Duration),
}
