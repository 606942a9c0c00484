use brandkit_error::action::ActionError;
use serde::{Deserialize, Serialize};

/// Uniform outcome of every mutating entry point.
///
/// Exactly one of `data` / `error` is meaningful: a failed call carries a
/// single human readable message, a successful one optionally carries the
/// created or updated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    #[inline]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    #[inline]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Convert an operation result, replacing storage detail with the retry hint
    /// built from `failure`.
    pub fn from_outcome(outcome: Result<T, ActionError>, failure: &str) -> Self {
        match outcome {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failed(e.user_message(failure)),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[inline]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ActionResult<()> {
    /// Success without a payload, serialized as `{"success":true}`.
    #[inline]
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}
