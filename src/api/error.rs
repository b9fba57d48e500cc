//! Errors produced by a submission attempt

use thiserror::Error;

/// Why a submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The backend answered with a non-success status
    #[error("backend rejected admission ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Application {
        status: u16,
        detail: Option<String>,
    },

    /// The request never completed
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
