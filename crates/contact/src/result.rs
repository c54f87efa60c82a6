use serde::{Deserialize, Serialize};

pub const INVALID_INPUT_MESSAGE: &str = "Missing or invalid name, email, or message";
/// Shared by configuration and delivery failures so callers cannot tell them apart.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    InvalidInput,
    NotConfigured,
    SendFailed,
}

impl FailureReason {
    pub fn public_message(&self) -> &'static str {
        match self {
            FailureReason::InvalidInput => INVALID_INPUT_MESSAGE,
            FailureReason::NotConfigured | FailureReason::SendFailed => SEND_FAILED_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure { reason: FailureReason },
}

impl SubmissionResult {
    pub fn failure(reason: FailureReason) -> Self {
        Self::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }
}

/// Wire shape: `{"success":true}` or `{"success":false,"error":"..."}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SendContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SubmissionResult> for SendContactResponse {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Success => Self {
                success: true,
                error: None,
            },
            SubmissionResult::Failure { reason } => Self {
                success: false,
                error: Some(reason.public_message().to_owned()),
            },
        }
    }
}
