//! Errors raised by brand mutations before they reach the caller.
//!
//! Every variant except [`ActionError::Storage`] carries a message that is
//! safe to show verbatim. Storage faults are replaced by an operation
//! specific retry hint at the action boundary.

use crate::storage::StorageError;
use sea_orm::DbErr;
use thiserror::Error;

pub const NO_BRAND_MESSAGE: &str = "No brand found. Please set up your brand first.";
pub const BRAND_EXISTS_MESSAGE: &str =
    "A brand already exists for this account. You can only have one brand.";

#[derive(Error, Debug)]
pub enum ActionError {
    /// Input rejected by the validation layer; holds the first failing rule.
    #[error("{0}")]
    Validation(String),

    /// The deployment has no brand row yet.
    #[error("{}", NO_BRAND_MESSAGE)]
    NoBrand,

    /// The referenced row does not exist or belongs to another brand.
    #[error("{0} not found.")]
    NotFound(String),

    /// Setup was attempted while a brand already exists.
    #[error("{}", BRAND_EXISTS_MESSAGE)]
    AlreadyExists,

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl From<DbErr> for ActionError {
    #[inline]
    fn from(e: DbErr) -> Self {
        ActionError::Storage(StorageError::DBError(e))
    }
}

impl ActionError {
    #[inline]
    pub fn validation(message: impl Into<String>) -> Self {
        ActionError::Validation(message.into())
    }

    #[inline]
    pub fn not_found(entity: impl Into<String>) -> Self {
        ActionError::NotFound(entity.into())
    }

    /// Storage faults are the only errors whose detail must stay internal.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, ActionError::Storage(_))
    }

    /// Message surfaced to the caller.
    ///
    /// `failure` names the operation, e.g. `"Failed to create rule"`, and is
    /// only used for storage faults.
    pub fn user_message(&self, failure: &str) -> String {
        match self {
            ActionError::Storage(_) => format!("{failure}. Please try again."),
            other => other.to_string(),
        }
    }
}
