//! Request lifecycle: which view a front end should render

use super::response::SubmissionResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureCategory {
    /// The request never completed (DNS, refused, reset)
    Connectivity,
    /// The webhook answered with a non-2xx status
    Transport { status: u16 },
    Generic,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCategory::Connectivity => write!(f, "connectivity"),
            FailureCategory::Transport { status } => write!(f, "transport (HTTP {})", status),
            FailureCategory::Generic => write!(f, "generic"),
        }
    }
}

/// Terminal failure of one submission. Carries only what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFailure {
    pub category: FailureCategory,
    pub title: String,
    pub message: String,
}

impl SubmissionFailure {
    pub fn connectivity() -> Self {
        Self {
            category: FailureCategory::Connectivity,
            title: "Connection Error".to_string(),
            message: "Unable to reach our AI service. Please check your internet connection and try again.".to_string(),
        }
    }

    pub fn transport(status: u16) -> Self {
        Self {
            category: FailureCategory::Transport { status },
            title: "Oops! Something went wrong".to_string(),
            message: format!(
                "Our AI is trying very hard! Please try again in a moment. (HTTP {})",
                status
            ),
        }
    }

    pub fn generic(detail: impl Into<String>) -> Self {
        Self {
            category: FailureCategory::Generic,
            title: "Oops! Something went wrong".to_string(),
            message: detail.into(),
        }
    }

    /// HTTP status for transport failures
    pub fn status(&self) -> Option<u16> {
        match self.category {
            FailureCategory::Transport { status } => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Message shown when the client-side timeout fires
pub const STILL_PROCESSING_MESSAGE: &str =
    "Your variations are still being generated. The results will be sent to your email.";

/// State of the current (or last) submission of a form instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestLifecycle {
    /// Editing; no request made since the last reset
    #[default]
    Idle,
    /// One request in flight; further submits are rejected
    Submitting,
    Succeeded { result: SubmissionResult },
    /// Client-side timeout fired; the webhook may still deliver by email
    StillProcessing,
    Failed { failure: SubmissionFailure },
}

impl RequestLifecycle {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestLifecycle::Submitting)
    }

    /// Succeeded, still processing, or failed
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestLifecycle::Succeeded { .. }
                | RequestLifecycle::StillProcessing
                | RequestLifecycle::Failed { .. }
        )
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        match self {
            RequestLifecycle::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match self {
            RequestLifecycle::Failed { failure } => Some(failure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestLifecycle::Idle => "idle",
            RequestLifecycle::Submitting => "submitting",
            RequestLifecycle::Succeeded { .. } => "succeeded",
            RequestLifecycle::StillProcessing => "still_processing",
            RequestLifecycle::Failed { .. } => "failed",
        }
    }
}
