//! Timer errors

use akademix_core::AkademixError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("unknown timer mode: {0}")]
    UnknownMode(String),
}

impl From<TimerError> for AkademixError {
    fn from(err: TimerError) -> Self {
        match err {
            TimerError::UnknownMode(m) => AkademixError::invalid_mode(&m),
        }
    }
}
