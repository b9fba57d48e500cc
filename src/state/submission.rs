//! Submission lifecycle status

/// Banner text shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Student admission created successfully!";

/// Used when the backend rejects a submission without a `detail`
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to create admission";

/// Used when the backend could not be reached at all
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please ensure the backend is running.";

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Tone of the feedback banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Feedback banner for this status, if any
    pub fn banner(&self) -> Option<(BannerKind, &str)> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Succeeded => Some((BannerKind::Success, SUCCESS_MESSAGE)),
            Self::Failed(message) => Some((BannerKind::Error, message.as_str())),
        }
    }
}
